use yew::prelude::*;
use web_sys::{window, HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::JsCast;
use std::f64::consts::PI;
use shared::constants::{SPIN_ANIMATION_MS, YELLOW_SECTOR_END_DEG, PURPLE_SECTOR_END_DEG};

const WHEEL_SIZE: u32 = 400;

// (start, end, fill), degrees clockwise from the pointer
const SECTORS: [(f64, f64, &str); 3] = [
    (0.0, YELLOW_SECTOR_END_DEG, "#facc15"),
    (YELLOW_SECTOR_END_DEG, PURPLE_SECTOR_END_DEG, "#8b5cf6"),
    (PURPLE_SECTOR_END_DEG, 360.0, "#3b82f6"),
];

// Canvas angles start at 3 o'clock, the pointer sits at 12
fn to_canvas_radians(degrees: f64) -> f64 {
    (degrees - 90.0) * PI / 180.0
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn draw_wheel(context: &CanvasRenderingContext2d, size: f64) {
    let center = size / 2.0;
    let radius = center - 20.0;
    let dark = is_dark_mode();

    context.clear_rect(0.0, 0.0, size, size);

    // Outer glow
    context.begin_path();
    context.set_fill_style_str(if dark { "rgba(130, 100, 255, 0.15)" } else { "rgba(100, 130, 255, 0.15)" });
    let _ = context.arc(center, center, radius + 15.0, 0.0, 2.0 * PI);
    context.fill();

    for (start, end, fill) in SECTORS {
        context.begin_path();
        context.set_fill_style_str(fill);
        context.move_to(center, center);
        let _ = context.arc(center, center, radius, to_canvas_radians(start), to_canvas_radians(end));
        context.close_path();
        context.fill();
    }

    // Sector dividers
    context.set_stroke_style_str(if dark { "rgba(255, 255, 255, 0.7)" } else { "rgba(255, 255, 255, 0.9)" });
    context.set_line_width(2.5);
    for (start, _, _) in SECTORS {
        let angle = to_canvas_radians(start);
        context.begin_path();
        context.move_to(center, center);
        context.line_to(center + radius * angle.cos(), center + radius * angle.sin());
        context.stroke();
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#ffffff" });
    let _ = context.arc(center, center, radius * 0.15, 0.0, 2.0 * PI);
    context.fill();
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    /// Absolute rotation in degrees, animated by CSS.
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    // The wheel never changes, only its transform does
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let context = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| canvas.get_context("2d").ok().flatten())
                .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
            match context {
                Some(context) => draw_wheel(&context, WHEEL_SIZE as f64),
                None => log::warn!("Wheel canvas has no 2d context"),
            }
            || ()
        });
    }

    let style = format!(
        "transform: rotate({}deg); transition: transform {}ms cubic-bezier(0.17, 0.67, 0.12, 0.99);",
        props.rotation, SPIN_ANIMATION_MS
    );

    html! {
        <div class="relative mx-auto w-full max-w-[400px] aspect-square">
            // Pointer
            <div class="absolute left-1/2 -translate-x-1/2 -top-1 z-10 w-0 h-0 border-l-[14px] border-r-[14px] border-t-[24px] border-l-transparent border-r-transparent border-t-red-500 drop-shadow"></div>
            <canvas
                ref={canvas_ref}
                width={WHEEL_SIZE.to_string()}
                height={WHEEL_SIZE.to_string()}
                style={style}
                class={classes!("w-full", "h-full", props.is_spinning.then_some("drop-shadow-[0_0_12px_rgba(255,215,130,0.6)]"))}
            />
        </div>
    }
}
