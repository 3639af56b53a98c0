use namematch::MatchMode;
use wasm_bindgen::prelude::*;

// Set panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn parse_mode(mode: &str) -> Result<MatchMode, JsValue> {
    mode.parse::<MatchMode>().map_err(|e| JsValue::from_str(&e))
}

/// Compute the highlight regions for `pattern` against `name`.
///
/// Returns `null` when the name does not match, otherwise a flat
/// `Uint32Array` of `(byteStart, byteLength)` pairs into `name`. A matching
/// name with nothing to highlight yields an empty array.
#[wasm_bindgen(js_name = computeMatchingRegions)]
pub fn compute_matching_regions(
    pattern: &str,
    name: &str,
    mode: &str,
) -> Result<Option<Vec<u32>>, JsValue> {
    let mode = parse_mode(mode)?;
    let regions = namematch::compute_matching_regions(pattern, name, mode).map(|spans| {
        let mut flat = Vec::with_capacity(spans.len() * 2);
        for (start, len) in spans {
            flat.push(start as u32);
            flat.push(len as u32);
        }
        flat
    });
    Ok(regions)
}

/// True when `pattern` matches `name` in the given mode.
#[wasm_bindgen(js_name = isMatch)]
pub fn is_match(pattern: &str, name: &str, mode: &str) -> Result<bool, JsValue> {
    let mode = parse_mode(mode)?;
    Ok(namematch::is_match(pattern, name, mode))
}

/// The accepted mode names, for building UI selectors.
#[wasm_bindgen(js_name = modeNames)]
pub fn mode_names() -> Vec<JsValue> {
    MatchMode::ALL
        .iter()
        .map(|mode| JsValue::from_str(mode.as_str()))
        .collect()
}
