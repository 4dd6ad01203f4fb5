//! Main module for the radix timer widget using Yew.
//! Wires the counter model, the tick interval, and the UI components.

use gloo_timers::callback::Interval;
use radix_timer::defaults::SLOT_COUNT;
use radix_timer::CounterBank;
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod config;
mod utils;

use components::{render_timer_frames, ControlBar, SettingsForm};
use config::*;
use utils::parse_base_entries;

/// Reducer store holding the counter model, so the tick callback always
/// acts on the current bank instead of a render-time snapshot.
struct BankState {
    bank: CounterBank,
}

impl Default for BankState {
    fn default() -> Self {
        Self {
            bank: CounterBank::new(),
        }
    }
}

enum BankAction {
    Tick,
    Start,
    Stop,
    Reset,
    ApplyBases([u32; SLOT_COUNT]),
}

impl Reducible for BankState {
    type Action = BankAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut bank = self.bank.clone();
        match action {
            BankAction::Tick => bank.advance(),
            BankAction::Start => bank.start(),
            BankAction::Stop => bank.stop(),
            BankAction::Reset => bank.reset(),
            BankAction::ApplyBases(bases) => {
                // The settings form validates before dispatching; a rejected
                // batch leaves the bank untouched either way.
                if let Err(err) = bank.apply_bases(bases) {
                    log::warn!("base settings not applied: {}", err);
                }
            }
        }
        Rc::new(Self { bank })
    }
}

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let bank = use_reducer(BankState::default);
    let settings_open = use_state(|| false);
    let drafts = use_state(|| [String::new(), String::new(), String::new()]);
    let settings_error = use_state(|| None::<String>);

    let running = bank.bank.is_running();

    // Drive the 1-second tick exactly while running; dropping the interval
    // on stop/reset unschedules it.
    {
        let dispatcher = bank.dispatcher();
        use_effect_with(running, move |&running| {
            let interval = running.then(|| {
                Interval::new(TICK_INTERVAL_MS, move || {
                    dispatcher.dispatch(BankAction::Tick);
                })
            });
            move || drop(interval)
        });
    }

    let onstart = {
        let dispatcher = bank.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(BankAction::Start))
    };
    let onstop = {
        let dispatcher = bank.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(BankAction::Stop))
    };
    let onreset = {
        let dispatcher = bank.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(BankAction::Reset))
    };

    // Opens the settings panel unless it is already open, pre-filling the
    // drafts with the current bases.
    let onsettings = {
        let settings_open = settings_open.clone();
        let settings_error = settings_error.clone();
        let drafts = drafts.clone();
        let bank = bank.clone();
        Callback::from(move |_| {
            if *settings_open {
                return;
            }
            drafts.set(bank.bank.bases().map(|base| base.to_string()));
            settings_error.set(None);
            settings_open.set(true);
        })
    };

    let on_draft_input = {
        let drafts = drafts.clone();
        Callback::from(move |(slot, text): (usize, String)| {
            let mut next = (*drafts).clone();
            next[slot] = text;
            drafts.set(next);
        })
    };

    // All-or-nothing apply: nothing is dispatched unless every field parses
    // as a base in range, and the panel only closes on success.
    let onapply = {
        let drafts = drafts.clone();
        let settings_error = settings_error.clone();
        let settings_open = settings_open.clone();
        let dispatcher = bank.dispatcher();
        Callback::from(move |_| match parse_base_entries(&drafts) {
            Ok(bases) => {
                dispatcher.dispatch(BankAction::ApplyBases(bases));
                settings_error.set(None);
                settings_open.set(false);
            }
            Err(err) => {
                log::warn!("base settings rejected: {}", err);
                settings_error.set(Some(BASE_RANGE_MESSAGE.to_string()));
            }
        })
    };

    let onclose = {
        let settings_open = settings_open.clone();
        let settings_error = settings_error.clone();
        Callback::from(move |_| {
            settings_error.set(None);
            settings_open.set(false);
        })
    };

    html! {
        <div class="container">
            <h1 class="title">{ APP_TITLE }</h1>

            { render_timer_frames(&bank.bank) }

            <ControlBar
                running={running}
                onstart={onstart}
                onstop={onstop}
                onreset={onreset}
                onsettings={onsettings}
            />

            if *settings_open {
                <SettingsForm
                    drafts={(*drafts).clone()}
                    error={(*settings_error).clone()}
                    oninput={on_draft_input}
                    onapply={onapply}
                    onclose={onclose}
                />
            }
        </div>
    }
}

/// Entry point: installs the panic hook and starts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
