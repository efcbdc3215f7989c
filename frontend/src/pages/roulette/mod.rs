mod panels;
mod view;
mod wheel_canvas;

use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use shared::constants::{BATCH_LABEL_IDLE, RESET_LABEL, SPIN_LABEL_IDLE};
use shared::controller::SpinController;
use shared::history::{HistoryRow, ResultDisplay};
use shared::shared_roulette_game::{ColorOdds, Statistics};
use crate::api::HttpApi;
use crate::config::get_api_base_url;
use crate::styles;

use panels::{HistoryTable, OddsTable, ResultBox, SpinButton, StatsPanel};
use view::{StateView, TimerPause};
use wheel_canvas::WheelCanvas;

type Controller = SpinController<HttpApi, StateView, TimerPause>;

const CUSTOM_CSS: &str = r#"
.result-box {
    display: inline-block;
    min-width: 12rem;
    padding: 0.75rem 1.5rem;
    border-radius: 0.75rem;
    font-size: 1.5rem;
    font-weight: 700;
    text-align: center;
    background: #e5e7eb;
    color: #111827;
}
.result-box.blue, .stat-blue { background: #3b82f6; color: #fff; }
.result-box.purple, .stat-purple { background: #8b5cf6; color: #fff; }
.result-box.yellow, .stat-yellow { background: #facc15; color: #111827; }
.color-blue { color: #2563eb; font-weight: 600; }
.color-purple { color: #7c3aed; font-weight: 600; }
.color-yellow { color: #ca8a04; font-weight: 600; }
"#;

#[function_component(RouletteGame)]
pub fn roulette_game() -> Html {
    {
        use_effect_with((), move |_| {
            let style_element = window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    let head = document.head()?;
                    let style = document.create_element("style").ok()?;
                    style.set_text_content(Some(CUSTOM_CSS));
                    head.append_child(&style).ok()?;
                    Some(style)
                });

            move || {
                if let Some(style) = style_element {
                    if let Some(parent) = style.parent_node() {
                        let _ = parent.remove_child(&style);
                    }
                }
            }
        });
    }

    let controls_enabled = use_state(|| true);
    let spin_label = use_state(|| SPIN_LABEL_IDLE.to_string());
    let batch_label = use_state(|| BATCH_LABEL_IDLE.to_string());
    let rotation = use_state(|| 0.0_f64);
    let result = use_state(|| None::<ResultDisplay>);
    let statistics = use_state(Statistics::default);
    let history = use_state(Vec::<HistoryRow>::new);
    let odds = use_state(Vec::<ColorOdds>::new);

    // One controller for the lifetime of the page
    let controller: Rc<Controller> = {
        let view = StateView {
            controls_enabled: controls_enabled.setter(),
            spin_label: spin_label.setter(),
            batch_label: batch_label.setter(),
            rotation: rotation.setter(),
            result: result.setter(),
            statistics: statistics.setter(),
            history: history.setter(),
            odds: odds.setter(),
        };
        use_memo((), move |_| {
            SpinController::new(HttpApi::new(get_api_base_url()), view, TimerPause)
        })
    };

    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                controller.initialize().await;
            });
            || ()
        });
    }

    let on_spin = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.spin_once().await;
            });
        })
    };

    let on_spin_ten = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.spin_ten().await;
            });
        })
    };

    let on_reset = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.reset().await;
            });
        })
    };

    let disabled = !*controls_enabled;

    html! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white">
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-blue-500 via-purple-500 to-yellow-400">{"Ruleta Virtual"}</span>
            </h1>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 max-w-6xl mx-auto">
                <div class="bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl border border-gray-100 dark:border-gray-700 space-y-6">
                    <WheelCanvas rotation={*rotation} is_spinning={disabled} />

                    <OddsTable odds={(*odds).clone()} />

                    <div class="flex flex-wrap justify-center gap-3">
                        <SpinButton label={(*spin_label).clone()} disabled={disabled} onclick={on_spin} />
                        <SpinButton label={(*batch_label).clone()} disabled={disabled} onclick={on_spin_ten} />
                        <SpinButton label={RESET_LABEL} disabled={false} onclick={on_reset} class={styles::BUTTON_DANGER} />
                    </div>

                    <div class="flex justify-center">
                        <ResultBox result={(*result).clone()} />
                    </div>
                </div>

                <div class="space-y-6">
                    <StatsPanel statistics={(*statistics).clone()} />
                    <HistoryTable rows={(*history).clone()} />
                </div>
            </div>
        </div>
    }
}
