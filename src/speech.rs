//! Web Speech API Bindings
//!
//! Thin wrapper over the browser's `SpeechRecognition` (or the
//! `webkitSpeechRecognition` constructor Chrome and Safari ship). Events are
//! forwarded as `RecognitionEvent`s; the capture state lives in
//! `bazar_core::CaptureSession`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = js_sys::Object)]
    type Recognizer;

    #[wasm_bindgen(method, setter = lang)]
    fn set_lang(this: &Recognizer, lang: &str);

    #[wasm_bindgen(method, setter = continuous)]
    fn set_continuous(this: &Recognizer, value: bool);

    #[wasm_bindgen(method, setter = interimResults)]
    fn set_interim_results(this: &Recognizer, value: bool);

    #[wasm_bindgen(method, setter = onresult)]
    fn set_onresult(this: &Recognizer, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, setter = onerror)]
    fn set_onerror(this: &Recognizer, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, setter = onend)]
    fn set_onend(this: &Recognizer, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, catch)]
    fn start(this: &Recognizer) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn abort(this: &Recognizer);
}

const CONSTRUCTORS: &[&str] = &["SpeechRecognition", "webkitSpeechRecognition"];

/// Recognizer callbacks, translated
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    Interim(String),
    Final(String),
    Error(String),
    End,
}

fn constructor() -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    CONSTRUCTORS.iter().find_map(|name| {
        js_sys::Reflect::get(&window, &JsValue::from_str(name))
            .ok()
            .filter(|value| value.is_function())
            .map(|value| value.unchecked_into::<js_sys::Function>())
    })
}

/// Whether this browser can do speech recognition at all
pub fn is_supported() -> bool {
    constructor().is_some()
}

/// A running recognizer. Dropping it detaches the handlers and aborts.
pub struct Recognition {
    recognizer: Recognizer,
    _on_result: Closure<dyn FnMut(JsValue)>,
    _on_error: Closure<dyn FnMut(JsValue)>,
    _on_end: Closure<dyn FnMut(JsValue)>,
}

impl Recognition {
    /// Create a single-utterance recognizer with interim results and start it
    pub fn start<F>(locale: &str, on_event: F) -> Result<Self, String>
    where
        F: Fn(RecognitionEvent) + Clone + 'static,
    {
        let ctor = constructor().ok_or_else(|| "speech recognition unsupported".to_string())?;
        let recognizer: Recognizer = js_sys::Reflect::construct(&ctor, &js_sys::Array::new())
            .map_err(|e| format!("{:?}", e))?
            .unchecked_into();

        recognizer.set_lang(locale);
        recognizer.set_continuous(false);
        recognizer.set_interim_results(true);

        let handler = on_event.clone();
        let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            if let Some(result) = read_result(&event) {
                handler(result);
            }
        });
        let handler = on_event.clone();
        let on_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let code = js_sys::Reflect::get(&event, &JsValue::from_str("error"))
                .ok()
                .and_then(|value| value.as_string())
                .unwrap_or_else(|| "unknown".to_string());
            handler(RecognitionEvent::Error(code));
        });
        let handler = on_event;
        let on_end = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
            handler(RecognitionEvent::End);
        });

        recognizer.set_onresult(Some(on_result.as_ref().unchecked_ref()));
        recognizer.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        recognizer.set_onend(Some(on_end.as_ref().unchecked_ref()));

        let recognition = Self {
            recognizer,
            _on_result: on_result,
            _on_error: on_error,
            _on_end: on_end,
        };
        recognition.recognizer.start().map_err(|e| format!("{:?}", e))?;
        Ok(recognition)
    }
}

impl Drop for Recognition {
    fn drop(&mut self) {
        self.recognizer.set_onresult(None);
        self.recognizer.set_onerror(None);
        self.recognizer.set_onend(None);
        self.recognizer.abort();
    }
}

/// Pull the current transcript out of a `SpeechRecognitionEvent`
fn read_result(event: &JsValue) -> Option<RecognitionEvent> {
    let get = |target: &JsValue, key: &str| js_sys::Reflect::get(target, &JsValue::from_str(key)).ok();

    let index = get(event, "resultIndex")?.as_f64()? as u32;
    let results = get(event, "results")?;
    let result = js_sys::Reflect::get_u32(&results, index).ok()?;
    let alternative = js_sys::Reflect::get_u32(&result, 0).ok()?;
    let transcript = get(&alternative, "transcript")?.as_string()?;
    let is_final = get(&result, "isFinal").and_then(|v| v.as_bool()).unwrap_or(false);

    Some(if is_final {
        RecognitionEvent::Final(transcript)
    } else {
        RecognitionEvent::Interim(transcript)
    })
}
