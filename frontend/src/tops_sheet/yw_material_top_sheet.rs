use yew::{html, Component, Context, Html, NodeRef, Properties};

const SHOW_CLASS: &str = "show";

/// Sheet sliding down from the top of the viewport. Hidden until
/// `open_top_sheet` adds the `show` class to it.
pub struct YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

/// The class is added on the next tick so the CSS transition runs even when
/// the sheet was rendered in the same update.
pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(50).await;
        if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
            top_sheet.class_list().add_1(SHOW_CLASS).ok();
        }
    });
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        top_sheet.class_list().remove_1(SHOW_CLASS).ok();
    }
}
