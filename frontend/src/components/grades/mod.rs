//! Grade input page: the class roster against the assessment columns of one
//! teaching assignment.
//!
//! Split the same way as the other stateful pages: `state` holds the data,
//! `update` applies messages and starts the server round-trips, `view`
//! renders. All grade bookkeeping is delegated to `GradeReconciler` and the
//! editor flows of the common crate.

use common::editor::load_assignment;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::GradeInputProps;
pub use state::GradeInputPage;

use crate::helpers::set_window_dirty_flag;

impl Component for GradeInputPage {
    type Message = Msg;
    type Properties = GradeInputProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let assignment_id = ctx.props().assignment_id;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(load_assignment(&api, assignment_id).await));
        });
        GradeInputPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        set_window_dirty_flag(false);
    }
}
