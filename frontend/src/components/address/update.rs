//! Update function for the address form component.
//!
//! Elm-style: `update` receives the current state, the `Context` and a `Msg`,
//! mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Keystrokes reschedule a debounced search carrying the text typed at that
//!   moment; queries of fewer than three characters are never searched.
//! - Every search and detail request carries a ticket. A response that is not
//!   the latest only releases the loading indicator.
//! - Selecting a suggestion closes the dropdown at once, whatever the detail
//!   request then returns.
//! - Fetch failures are logged to the console and leave the form usable.
//! - Verification reports success, mismatch and failure in a blocking alert.

use common::search::DEBOUNCE_MS;
use gloo_console::{error, warn};
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::requests;
use super::state::AddressFormComponent;

pub const VERIFIED_MESSAGE: &str = "Address verified successfully!";
pub const NOT_VERIFIED_MESSAGE: &str = "Address verification failed.";

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May start requests whose results come back as further messages.
/// - Returns `true` to re-render the view, `false` when nothing visible changed.
pub fn update(
    component: &mut AddressFormComponent,
    ctx: &Context<AddressFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::QueryChanged(query) => {
            component.query = query;
            // Replacing the previous timeout drops and thereby cancels it.
            component.debounce_timer = component.debounce.schedule(&component.query).map(|pending| {
                let link = ctx.link().clone();
                Timeout::new(DEBOUNCE_MS, move || {
                    link.send_message(Msg::QuietPeriodElapsed(pending));
                })
            });
            true
        }
        Msg::QuietPeriodElapsed(pending) => {
            component.debounce_timer = None;
            match component.debounce.fire(pending) {
                Some(query) => {
                    start_search(component, ctx, query);
                    true
                }
                None => false,
            }
        }
        Msg::SuggestionsLoaded { ticket, result } => {
            if let Err(e) = component.apply_suggestions(ticket, result) {
                error!(format!("Error fetching suggestions: {}", e));
            }
            true
        }
        Msg::SuggestionSelected(suggestion) => {
            let Some(ticket) = component.select(&suggestion) else {
                return true;
            };

            let api_path = ctx.props().api_path.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = requests::fetch_place_details(&api_path, &suggestion.id)
                    .await
                    .map_err(|e| e.to_string());
                link.send_message(Msg::DetailsLoaded {
                    ticket,
                    display_name: suggestion.display_name,
                    result,
                });
            });
            true
        }
        Msg::DetailsLoaded {
            ticket,
            display_name,
            result,
        } => {
            if let Err(e) = component.apply_details(ticket, display_name, result) {
                error!(format!("Error fetching place details: {}", e));
            }
            true
        }
        Msg::Verify => {
            if component.verifying {
                return false;
            }
            component.verifying = true;

            let dataset_path = ctx.props().dataset_path.clone();
            let zip = component.address.zip.clone();
            let city = component.address.city.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = requests::verify_address(&dataset_path, &zip, &city).await;
                link.send_message(Msg::VerificationFinished(result));
            });
            true
        }
        Msg::VerificationFinished(result) => {
            component.verifying = false;
            if let Err(e) = &result {
                warn!(format!("Address verification could not run: {}", e));
            }
            show_alert(&verification_message(&result));
            true
        }
    }
}

/// Issues a search for `query`, clearing the current list until it answers.
fn start_search(component: &mut AddressFormComponent, ctx: &Context<AddressFormComponent>, query: String) {
    let ticket = component.begin_search();
    let api_path = ctx.props().api_path.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = requests::fetch_suggestions(&api_path, query)
            .await
            .map_err(|e| e.to_string());
        link.send_message(Msg::SuggestionsLoaded { ticket, result });
    });
}

/// Text of the alert shown once a verification finishes.
pub fn verification_message(result: &Result<bool, String>) -> String {
    match result {
        Ok(true) => VERIFIED_MESSAGE.to_string(),
        Ok(false) => NOT_VERIFIED_MESSAGE.to_string(),
        Err(e) => format!("Address verification could not be completed: {}", e),
    }
}

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

