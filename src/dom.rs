//! Thin `web-sys` helpers shared by the screens and the overlay.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window, window};

use crate::error::{CardError, Result};

pub fn win() -> Result<Window> {
    window().ok_or(CardError::MissingGlobal("window"))
}

pub fn document() -> Result<Document> {
    win()?.document().ok_or(CardError::MissingGlobal("document"))
}

pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Create `<tag style=..>` with optional text content.
pub fn el(doc: &Document, tag: &str, style: &str, text: Option<&str>) -> Result<HtmlElement> {
    let e: HtmlElement = doc.create_element(tag)?.dyn_into().map_err(|_| {
        CardError::Dom(format!("<{tag}> is not an HtmlElement"))
    })?;
    if !style.is_empty() {
        e.set_attribute("style", style)?;
    }
    if text.is_some() {
        e.set_text_content(text);
    }
    Ok(e)
}

/// `el` + append to `parent`.
pub fn child(
    doc: &Document,
    parent: &Element,
    tag: &str,
    style: &str,
    text: Option<&str>,
) -> Result<HtmlElement> {
    let e = el(doc, tag, style, text)?;
    parent.append_child(&e)?;
    Ok(e)
}

pub fn img(doc: &Document, parent: &Element, src: &str, alt: &str, style: &str) -> Result<HtmlElement> {
    let e = child(doc, parent, "img", style, None)?;
    e.set_attribute("src", src)?;
    e.set_attribute("alt", alt)?;
    Ok(e)
}

pub fn set_style(e: &Element, style: &str) {
    e.set_attribute("style", style).ok();
}

/// Toggle `display:none`, restoring whatever inline display the element had.
pub fn set_shown(e: &HtmlElement, shown: bool) {
    let style = e.style();
    let current = style.get_property_value("display").unwrap_or_default();
    if shown {
        if current == "none" {
            let restore = e.get_attribute("data-vc-display").unwrap_or_default();
            style.set_property("display", &restore).ok();
        }
    } else if current != "none" {
        e.set_attribute("data-vc-display", &current).ok();
        style.set_property("display", "none").ok();
    }
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &web_sys::EventTarget, kind: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(target: &Element, mut handler: F) -> Result<()>
where
    F: FnMut() + 'static,
{
    listen(target, "click", move |_| handler())
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout<F>(ms: i32, f: F)
where
    F: FnOnce() + 'static,
{
    let Some(w) = window() else { return };
    let cb = Closure::once_into_js(f);
    if let Err(err) =
        w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
    {
        tracing::warn!(?err, "setTimeout failed");
    }
}

/// Ensure the card container exists under `<body>` and return it emptied.
pub fn root(doc: &Document) -> Result<HtmlElement> {
    if let Some(existing) = doc.get_element_by_id("vc-root") {
        let existing: HtmlElement = existing
            .dyn_into()
            .map_err(|_| CardError::Dom("#vc-root is not an HtmlElement".into()))?;
        existing.set_inner_html("");
        return Ok(existing);
    }
    let body = doc.body().ok_or(CardError::MissingGlobal("body"))?;
    let div = el(
        doc,
        "div",
        "min-height:100vh; overflow-x:hidden; background:#fff5f7; font-family:'Quicksand', system-ui, sans-serif; color:#3f1d2b;",
        None,
    )?;
    div.set_id("vc-root");
    body.append_child(&div)?;
    Ok(div)
}

/// Keyframes and shared classes, injected once.
pub fn inject_styles(doc: &Document) -> Result<()> {
    if doc.get_element_by_id("vc-styles").is_some() {
        return Ok(());
    }
    let head = doc.head().ok_or(CardError::MissingGlobal("head"))?;
    let style = el(doc, "style", "", Some(STYLES))?;
    style.set_id("vc-styles");
    head.append_child(&style)?;
    Ok(())
}

pub const PAGE: &str = "position:relative; overflow:hidden; min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; padding:24px; box-sizing:border-box;";
pub const TITLE: &str = "font-family:'Dancing Script', cursive; font-size:44px; color:#be123c; margin:0 0 16px 0; text-align:center;";
pub const BUTTON: &str = "background:linear-gradient(135deg,#f43f5e,#ec4899); color:#fff; border:none; border-radius:9999px; padding:18px 44px; font-size:20px; cursor:pointer; box-shadow:0 8px 24px rgba(236,72,153,0.35); animation:vc-bounce-in 0.6s ease-out both;";
pub const MUTED: &str = "color:#9f7a88; text-align:center;";

const STYLES: &str = r#"
@keyframes vc-float { 0%,100% { transform: translateY(0); } 50% { transform: translateY(-14px); } }
@keyframes vc-slide-up { from { opacity: 0; transform: translateY(24px); } to { opacity: 1; transform: translateY(0); } }
@keyframes vc-bounce-in { 0% { opacity: 0; transform: scale(0.6); } 70% { transform: scale(1.05); } 100% { opacity: 1; transform: scale(1); } }
@keyframes vc-float-up { 0% { opacity: 1; transform: translateY(0) scale(1); } 100% { opacity: 0; transform: translateY(-60px) scale(1.5); } }
@keyframes vc-pulse { 0%,100% { opacity: 1; } 50% { opacity: 0.4; } }
"#;
