//! Pure Yew view components for the timer UI.
//!
//! Everything here renders from props alone; the state and callbacks are
//! wired up in `main.rs`.

use radix_timer::defaults::SLOT_COUNT;
use radix_timer::CounterBank;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::SETTINGS_PROMPT;

/// Renders the three fixed-width counter displays.
pub fn render_timer_frames(bank: &CounterBank) -> Html {
    html! {
        <div class="timer-frames">
            { (0..SLOT_COUNT).map(|slot| {
                html! {
                    <div class="timer-frame">
                        <span class="timer-digits">{ bank.format(slot) }</span>
                    </div>
                }
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ControlBarProps {
    pub running: bool,
    pub onstart: Callback<MouseEvent>,
    pub onstop: Callback<MouseEvent>,
    pub onreset: Callback<MouseEvent>,
    pub onsettings: Callback<MouseEvent>,
}

/// The start/stop/reset/settings button row. The start button is disabled
/// while the counters run, like the original widget.
#[function_component(ControlBar)]
pub fn control_bar(props: &ControlBarProps) -> Html {
    html! {
        <div class="button-row">
            <button class="btn-main"
                disabled={props.running}
                onclick={props.onstart.clone()}>{ "開始" }</button>
            <button class="btn-main" onclick={props.onstop.clone()}>{ "停止" }</button>
            <button class="btn-main" onclick={props.onreset.clone()}>{ "リセット" }</button>
            <button class="btn-accent" onclick={props.onsettings.clone()}>{ "設定" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsFormProps {
    /// Draft text of each base field, indexed by slot.
    pub drafts: [String; SLOT_COUNT],
    /// Validation error for the whole form, if the last apply failed.
    pub error: Option<String>,
    pub oninput: Callback<(usize, String)>,
    pub onapply: Callback<MouseEvent>,
    pub onclose: Callback<MouseEvent>,
}

/// The per-timer base settings form, shown while the settings panel is open.
///
/// Apply is all-or-nothing: `main.rs` only commits the bases once every
/// field validates, otherwise the form stays open showing `error`.
#[function_component(SettingsForm)]
pub fn settings_form(props: &SettingsFormProps) -> Html {
    let invalid = props.error.is_some();
    html! {
        <div class="settings-panel">
            <div class="settings-head">
                <span class="settings-title">{ SETTINGS_PROMPT }</span>
                <button class="settings-close" onclick={props.onclose.clone()}>{ "×" }</button>
            </div>
            { props.drafts.iter().enumerate().map(|(slot, draft)| {
                let oninput = {
                    let oninput = props.oninput.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        oninput.emit((slot, input.value()));
                    })
                };
                html! {
                    <div class="form-group">
                        <label>{ format!("タイマー {} の進数: ", slot + 1) }</label>
                        <input type="text"
                            value={draft.clone()}
                            class={if invalid { "invalid" } else { "" }}
                            {oninput}
                        />
                    </div>
                }
            }).collect::<Html>() }
            if let Some(ref err) = props.error {
                <div class="input-error">{ err }</div>
            }
            <button class="btn-accent" onclick={props.onapply.clone()}>{ "決定" }</button>
        </div>
    }
}
