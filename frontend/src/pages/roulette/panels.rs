use yew::prelude::*;
use shared::history::{HistoryRow, ResultDisplay};
use shared::shared_roulette_game::{Color, ColorOdds, Statistics};
use crate::styles;

fn color_title(color: Color) -> &'static str {
    match color {
        Color::Blue => "Azul",
        Color::Purple => "Morado",
        Color::Yellow => "Amarillo",
    }
}

// Spin / batch / reset button
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub label: AttrValue,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
    #[prop_or(styles::SPIN_BUTTON)]
    pub class: &'static str,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let state_class = if props.disabled {
        "opacity-60 cursor-not-allowed"
    } else {
        "hover:-translate-y-0.5 active:translate-y-0"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            class={classes!(props.class, state_class)}
        >
            {props.label.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultBoxProps {
    pub result: Option<ResultDisplay>,
}

#[function_component(ResultBox)]
pub fn result_box(props: &ResultBoxProps) -> Html {
    match &props.result {
        Some(result) => html! {
            <div class={classes!("result-box", result.css_class)}>{&result.text}</div>
        },
        None => html! {
            <div class="result-box">{"-"}</div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub statistics: Statistics,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let stats = &props.statistics;

    html! {
        <div class={styles::CARD}>
            <h3 class={styles::CARD_TITLE}>{"Estadísticas"}</h3>
            <div class="mt-4 grid grid-cols-2 gap-2 text-sm">
                <span class={styles::TEXT_SECONDARY}>{"Total de giros"}</span>
                <span class="font-bold text-right">{stats.total_spins}</span>
                <span class={styles::TEXT_SECONDARY}>{"Resultados en muestra"}</span>
                <span class="font-bold text-right">{stats.results_shown}</span>
            </div>
            <div class="mt-4 grid grid-cols-3 gap-3">
                { for Color::ALL.iter().map(|&color| html! {
                    <div class={classes!("rounded-lg", "p-3", "text-center", format!("stat-{}", color.css_class()))}>
                        <div class="text-xs uppercase tracking-wide">{color_title(color)}</div>
                        <div class="text-2xl font-bold">{stats.color_counts.get(color)}</div>
                        <div class="text-sm">{format!("{}%", stats.percentages.get(color))}</div>
                    </div>
                }) }
            </div>
            <div class={classes!("mt-4", "flex", "justify-between", styles::TEXT_SMALL)}>
                <span>{format!("Giros sin morado: {}", stats.spins_since_last_purple)}</span>
                <span>{format!("Giros sin amarillo: {}", stats.spins_since_last_yellow)}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryTableProps {
    pub rows: Vec<HistoryRow>,
}

#[function_component(HistoryTable)]
pub fn history_table(props: &HistoryTableProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <h3 class={styles::CARD_TITLE}>{"Historial"}</h3>
            <table class="mt-4 w-full text-sm">
                <thead>
                    <tr class={styles::TEXT_SECONDARY}>
                        <th class="text-left">{"#"}</th>
                        <th class="text-left">{"Resultado"}</th>
                        <th class="text-left">{"Hora"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| html! {
                        <tr key={row.spin_number}>
                            <td>{row.spin_number}</td>
                            <td><span class={row.css_class.clone()}>{&row.label}</span></td>
                            <td>{&row.time}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OddsTableProps {
    pub odds: Vec<ColorOdds>,
}

#[function_component(OddsTable)]
pub fn odds_table(props: &OddsTableProps) -> Html {
    if props.odds.is_empty() {
        return html! {};
    }

    html! {
        <div class={classes!("flex", "justify-center", "gap-4", styles::TEXT_SMALL)}>
            { for props.odds.iter().map(|entry| html! {
                <span class={format!("color-{}", entry.color.css_class())}>
                    {format!("{} {}: {}%", entry.outcome.value(), color_title(entry.color), entry.probability)}
                </span>
            }) }
        </div>
    }
}
