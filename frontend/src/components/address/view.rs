//! View rendering for the address form component.
//!
//! Top to bottom: the search input, a spinner while requests are in flight,
//! the suggestion dropdown, the nine read-only address fields and the
//! "Verify Address" button.

use super::messages::Msg;
use super::state::AddressFormComponent;
use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

/// Main view function for the address form component.
pub fn view(component: &AddressFormComponent, ctx: &Context<AddressFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="address-form">
            <h2 class="address-form-title">{"Address Autocomplete"}</h2>
            { build_search_input(component, link) }
            { build_spinner(component) }
            { build_suggestions(component, link) }
            { build_address_fields(component) }
            { build_verify_button(component, link) }
        </div>
    }
}

/// Every input event reports the full text; debouncing happens in `update`.
fn build_search_input(component: &AddressFormComponent, link: &Scope<AddressFormComponent>) -> Html {
    html! {
        <input
            type="text"
            class="search-input"
            placeholder="Search Address"
            aria-label="Search Address"
            autocomplete="off"
            value={component.query.clone()}
            oninput={link.callback(|e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::QueryChanged(input.value())
            })}
        />
    }
}

fn build_spinner(component: &AddressFormComponent) -> Html {
    if component.is_loading() {
        html! { <div class="spinner" role="progressbar" aria-label="Loading" /> }
    } else {
        html! {}
    }
}

/// Dropdown with one entry per suggestion; hidden while closed or empty.
fn build_suggestions(component: &AddressFormComponent, link: &Scope<AddressFormComponent>) -> Html {
    if !component.shows_suggestions() {
        return html! {};
    }

    html! {
        <ul class="suggestions" role="listbox">
            {
                for component.suggestions.iter().map(|suggestion| {
                    let selected = suggestion.clone();
                    html! {
                        <li
                            key={suggestion.id.clone()}
                            class="suggestion"
                            role="option"
                            onclick={link.callback(move |_: MouseEvent| Msg::SuggestionSelected(selected.clone()))}
                        >
                            <span class="suggestion-name">{ suggestion.display_name.clone() }</span>
                            <span class="suggestion-address">{ suggestion.formatted_address.clone() }</span>
                        </li>
                    }
                })
            }
        </ul>
    }
}

fn build_address_fields(component: &AddressFormComponent) -> Html {
    html! {
        <div class="address-fields">
            {
                for component.address.display_fields().into_iter().map(|(label, value)| html! {
                    <label class="address-field">
                        <span class="address-field-label">{ label }</span>
                        <input type="text" value={value.to_string()} disabled={true} />
                    </label>
                })
            }
        </div>
    }
}

fn build_verify_button(component: &AddressFormComponent, link: &Scope<AddressFormComponent>) -> Html {
    html! {
        <button
            class="verify-btn"
            disabled={component.verifying}
            onclick={link.callback(|_| Msg::Verify)}
        >
            {"Verify Address"}
        </button>
    }
}
