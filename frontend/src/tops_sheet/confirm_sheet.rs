use common::editor::Confirmation;
use yew::prelude::*;

use super::yw_material_top_sheet::YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct ConfirmSheetProps {
    pub node_ref: NodeRef,
    pub message: AttrValue,
    #[prop_or(AttrValue::from("Hapus"))]
    pub confirm_label: AttrValue,
    pub on_answer: Callback<Confirmation>,
}

/// Yes/no question shown in a top sheet.
#[function_component(ConfirmSheet)]
pub fn confirm_sheet(props: &ConfirmSheetProps) -> Html {
    let on_confirm = {
        let on_answer = props.on_answer.clone();
        Callback::from(move |_: MouseEvent| on_answer.emit(Confirmation::Confirmed))
    };
    let on_decline = {
        let on_answer = props.on_answer.clone();
        Callback::from(move |_: MouseEvent| on_answer.emit(Confirmation::Declined))
    };

    html! {
        <YwMaterialTopSheet node_ref={props.node_ref.clone()}>
            <div class="confirm-sheet">
                <p>{ props.message.clone() }</p>
                <div class="confirm-actions">
                    <button class="btn btn-secondary" onclick={on_decline}>{"Batal"}</button>
                    <button class="btn btn-danger" onclick={on_confirm}>
                        { props.confirm_label.clone() }
                    </button>
                </div>
            </div>
        </YwMaterialTopSheet>
    }
}
