use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn google_accounts_id(window: &web_sys::Window) -> Option<js_sys::Object> {
    let google = js_sys::Reflect::get(window, &"google".into()).ok()?;
    if google.is_undefined() || google.is_null() {
        return None;
    }
    let accounts = js_sys::Reflect::get(&google, &"accounts".into()).ok()?;
    let id = js_sys::Reflect::get(&accounts, &"id".into()).ok()?;
    if id.is_undefined() || id.is_null() {
        return None;
    }
    Some(js_sys::Object::from(id))
}

fn call_method(target: &js_sys::Object, name: &str, args: &[&JsValue]) {
    let method = match js_sys::Reflect::get(target, &name.into()) {
        Ok(value) => value,
        Err(_) => return,
    };
    let Some(function) = method.dyn_ref::<js_sys::Function>() else {
        return;
    };
    let _ = match args {
        [a] => function.call1(target, a),
        [a, b] => function.call2(target, a, b),
        _ => function.call0(target),
    };
}

/// Renders the Google sign-in button into the element with `container_id`.
/// A no-op when the GIS script has not loaded or no client id is configured,
/// so the login page still renders in offline development.
pub fn mount_google_button(container_id: &str, on_credential: Rc<dyn Fn(String)>) {
    let window = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let id_api = match google_accounts_id(&window) {
        Some(api) => api,
        None => {
            log::warn!("Google Identity Services script not loaded; sign-in unavailable");
            return;
        }
    };
    let client_id = match crate::config::google_client_id() {
        Some(id) => id,
        None => {
            log::warn!("No Google client id configured; sign-in unavailable");
            return;
        }
    };

    let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        let credential = js_sys::Reflect::get(&response, &"credential".into())
            .ok()
            .and_then(|v| v.as_string());
        if let Some(credential) = credential {
            on_credential(credential);
        }
    });

    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &options,
        &"client_id".into(),
        &JsValue::from_str(&client_id),
    );
    let _ = js_sys::Reflect::set(&options, &"callback".into(), callback.as_ref());
    call_method(&id_api, "initialize", &[&options]);

    if let Some(container) = window
        .document()
        .and_then(|doc| doc.get_element_by_id(container_id))
    {
        let button_options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &button_options,
            &"theme".into(),
            &JsValue::from_str("outline"),
        );
        let _ = js_sys::Reflect::set(&button_options, &"size".into(), &JsValue::from_str("large"));
        call_method(&id_api, "renderButton", &[&container, &button_options]);
    }

    // GIS keeps calling back into this closure for the lifetime of the page.
    callback.forget();
}
