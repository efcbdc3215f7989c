use frontend::App;
use yew::Renderer;

fn main() {
    // Browser console logging
    wasm_logger::init(wasm_logger::Config::default());

    Renderer::<App>::new().render();
}
