// Browser tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mounts_welcome_without_overlay() {
    valentine_card::start_card_with_config(r#"{"decor_seed":1}"#).unwrap();
    assert_eq!(valentine_card::current_screen(), "welcome");
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("vc-root").is_some());
    assert!(doc.get_element_by_id("vc-stage").is_some());
    assert!(doc.get_element_by_id("vc-player").is_none());
}

#[wasm_bindgen_test]
fn rejects_invalid_config() {
    assert!(valentine_card::start_card_with_config(r#"{"fill_step":0}"#).is_err());
}
