/// Popup UI for the Dictionary Tabs extension

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;
use yew::prelude::*;

use crate::bridge;
use crate::classify::classify;
use crate::export;
use crate::rules::RuleSet;
use crate::tab_data::ClassifiedTab;

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Reading,
    Success(String),
    Error(String),
}

/// Results of the last successful read
#[derive(Clone, PartialEq)]
struct ReadResults {
    tabs: Vec<ClassifiedTab>,
    total_tabs: usize,
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Idle);
    let rules = use_state(|| None::<RuleSet>);
    let results = use_state(|| None::<ReadResults>);
    let show_permissions_guide = use_state(|| false);

    // Load the rule configuration once on mount
    {
        let rules = rules.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                rules.set(Some(bridge::load_rules().await));
            });
            || ()
        });
    }

    // Read tabs handler
    let on_read = {
        let state = state.clone();
        let rules = rules.clone();
        let results = results.clone();
        let show_permissions_guide = show_permissions_guide.clone();

        Callback::from(move |_| {
            let state = state.clone();
            let rules = rules.clone();
            let results = results.clone();
            let show_permissions_guide = show_permissions_guide.clone();

            state.set(AppState::Reading);

            spawn_local(async move {
                // Rule loading may still be in flight on a fast click
                let rule_set = match (*rules).clone() {
                    Some(rule_set) => rule_set,
                    None => {
                        let rule_set = bridge::load_rules().await;
                        rules.set(Some(rule_set.clone()));
                        rule_set
                    }
                };

                match bridge::request_tabs().await {
                    Ok(tabs) => {
                        let classified = classify(&tabs, &rule_set);
                        let found = classified.len();
                        console::log_1(
                            &format!("{} of {} tabs matched a dictionary site", found, tabs.len())
                                .into(),
                        );

                        results.set(Some(ReadResults {
                            tabs: classified,
                            total_tabs: tabs.len(),
                        }));
                        show_permissions_guide.set(false);
                        state.set(AppState::Success(format!(
                            "Found {} dictionary tabs",
                            found
                        )));
                    }
                    Err(e) => {
                        show_permissions_guide.set(true);
                        state.set(AppState::Error(format!("Failed to read tabs: {}", e)));
                    }
                }
            });
        })
    };

    // Save as JSON handler
    let on_save = {
        let state = state.clone();
        let results = results.clone();

        Callback::from(move |_| {
            if let Some(read) = &*results {
                match export::save_as_file(&read.tabs) {
                    Ok(_) => state.set(AppState::Success("JSON file saved".to_string())),
                    Err(e) => state.set(AppState::Error(e)),
                }
            }
        })
    };

    // Copy to clipboard handler
    let on_copy = {
        let state = state.clone();
        let results = results.clone();

        Callback::from(move |_| {
            if let Some(read) = &*results {
                let state = state.clone();
                let tabs = read.tabs.clone();

                spawn_local(async move {
                    match export::copy_to_clipboard(&tabs).await {
                        Ok(_) => {
                            state.set(AppState::Success("JSON copied to clipboard".to_string()));
                        }
                        Err(e) => {
                            state.set(AppState::Error(format!("Failed to copy JSON: {}", e)));
                        }
                    }
                });
            }
        })
    };

    let is_busy = matches!(*state, AppState::Reading);
    let has_results = results.is_some();

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Dictionary Tabs"}</h1>

            <div class="flex-column-gap">
                <Button onclick={on_read} disabled={is_busy} variant={ButtonVariant::Primary} block={true}>
                    {"📑 Read Tabs"}
                </Button>
                <Button onclick={on_save} disabled={is_busy || !has_results} variant={ButtonVariant::Secondary} block={true}>
                    {"💾 Save as JSON"}
                </Button>
                <Button onclick={on_copy} disabled={is_busy || !has_results} variant={ButtonVariant::Secondary} block={true}>
                    {"📋 Copy JSON"}
                </Button>
            </div>

            // Status display
            {match &*state {
                AppState::Reading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Reading tabs..."}</p>
                    </div>
                },
                AppState::Success(msg) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Success} title={msg.clone()} inline={true}>
                        </Alert>
                    </div>
                },
                AppState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                AppState::Idle => html! {}
            }}

            if *show_permissions_guide {
                <div class="message-top-margin">
                    <Alert r#type={AlertType::Info} title={"Permission needed"} inline={true}>
                        {"Grant the extension the \"tabs\" permission in the browser's add-on settings, then try again."}
                    </Alert>
                </div>
            }

            // Results table
            if let Some(read) = &*results {
                <div class="results-container">
                    <p class="results-summary">
                        {format!("{} dictionary tabs out of {} open tabs", read.tabs.len(), read.total_tabs)}
                    </p>
                    <table class="pf-v5-c-table pf-m-compact results-table">
                        <thead>
                            <tr>
                                <th>{"#"}</th>
                                <th>{"Title"}</th>
                                <th>{"URL"}</th>
                                <th>{"Hostname"}</th>
                                <th>{"Search Term"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for read.tabs.iter().enumerate().map(|(index, tab)| html! {
                                <tr>
                                    <td>{index + 1}</td>
                                    <td>{&tab.title}</td>
                                    <td><a href={tab.url.clone()} target="_blank">{&tab.url}</a></td>
                                    <td>{tab.hostname()}</td>
                                    <td>{tab.search_term.clone().unwrap_or_else(|| "-".to_string())}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            }

            <p class="footer-popup">
                {"Dictionary Tabs v0.1.0"}
            </p>
        </div>
    }
}
