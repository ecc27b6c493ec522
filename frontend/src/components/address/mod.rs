//! Address autocomplete form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering
//! and the requests to the backend.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `AddressFormProps`, `AddressFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.

use yew::prelude::*;

mod messages;
mod props;
mod requests;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AddressFormProps;
pub use state::AddressFormComponent;

impl Component for AddressFormComponent {
    type Message = Msg;
    type Properties = AddressFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AddressFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
