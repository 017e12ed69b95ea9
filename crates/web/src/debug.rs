use crate::constants::DEBUG_API_NAME;
use crate::controls::Controls;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Install `window._demo = { setDemo(mode), reset() }` for console and test
/// harness use.
pub fn install_debug_api(window: &web::Window, controls: &Controls) -> anyhow::Result<()> {
    let api = js_sys::Object::new();

    let c = controls.clone();
    let set_demo = Closure::wrap(Box::new(move |mode: JsValue| match mode.as_string() {
        Some(id) => c.set_mode_id(&id),
        None => log::warn!("[debug] setDemo expects a string, got {:?}", mode),
    }) as Box<dyn FnMut(JsValue)>);

    let c = controls.clone();
    let reset = Closure::wrap(Box::new(move || c.reset()) as Box<dyn FnMut()>);

    set_prop(&api, "setDemo", set_demo.as_ref())?;
    set_prop(&api, "reset", reset.as_ref())?;
    set_prop(window, DEBUG_API_NAME, &api)?;

    set_demo.forget();
    reset.forget();
    log::info!("[init] debug API on window.{}", DEBUG_API_NAME);
    Ok(())
}

fn set_prop(target: &JsValue, key: &str, value: &JsValue) -> anyhow::Result<()> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
