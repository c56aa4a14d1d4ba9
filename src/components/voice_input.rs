//! Voice Input Component
//!
//! Dictate an item. The recognizer reports into a `CaptureSession`; the
//! finished transcript is added to the active list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use bazar_core::{CaptureError, CaptureSession, Language, Message, Notice};

use crate::context::AppContext;
use crate::speech::{self, Recognition, RecognitionEvent};

#[component]
pub fn VoiceInput() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let lang = ctx.language;

    let session = StoredValue::new_local(CaptureSession::new(speech::is_supported(), Language::Bengali));
    let recognition = StoredValue::new_local(None::<Recognition>);

    let (listening, set_listening) = signal(false);
    let (transcript, set_transcript) = signal(String::new());
    let (available, set_available) = signal(session.with_value(|s| s.is_available()));
    let (capture_lang, set_capture_lang) = signal(Language::Bengali);

    // Called from inside recognizer callbacks, so the recognizer is released
    // on the next tick rather than here.
    let finish = move || {
        set_listening.set(false);
        set_transcript.set(String::new());
        set_available.set(session.with_value(|s| s.is_available()));
        spawn_local(async move {
            recognition.set_value(None);
        });
    };

    let on_event = move |event: RecognitionEvent| match event {
        RecognitionEvent::Interim(text) => {
            session.update_value(|s| s.interim(&text));
            set_transcript.set(text);
        }
        RecognitionEvent::Final(text) => {
            session.update_value(|s| s.finalize(&text));
            set_transcript.set(text);
        }
        RecognitionEvent::End => {
            session.update_value(|s| {
                s.end();
            });
            finish();
        }
        RecognitionEvent::Error(code) => {
            match CaptureError::from_engine_code(&code) {
                Some(err) => {
                    let mut failure = None;
                    session.update_value(|s| failure = Some(s.fail(err)));
                    if let Some(err) = failure {
                        ctx.notify(Notice::from(&err));
                    }
                }
                None => session.update_value(|s| s.cancel()),
            }
            finish();
        }
    };

    let start = move || {
        let mut started = None;
        session.update_value(|s| started = Some(s.start()));
        let receiver = match started {
            Some(Ok(receiver)) => receiver,
            Some(Err(err)) => {
                ctx.notify(Notice::from(&err));
                set_available.set(session.with_value(|s| s.is_available()));
                return;
            }
            None => return,
        };

        let locale = capture_lang.get_untracked().speech_locale();
        match Recognition::start(locale, on_event) {
            Ok(handle) => {
                recognition.set_value(Some(handle));
                set_listening.set(true);
            }
            Err(reason) => {
                log::warn!("Could not start speech recognition: {}", reason);
                session.update_value(|s| s.cancel());
                ctx.notify(Notice::error(Message::CaptureStartFailed));
                return;
            }
        }

        spawn_local(async move {
            if let Ok(heard) = receiver.await {
                ctx.dispatch_active(|core, id| core.add_transcript(id, heard));
            }
        });
    };

    let stop = move || {
        session.update_value(|s| s.cancel());
        recognition.set_value(None);
        set_listening.set(false);
        set_transcript.set(String::new());
    };

    let toggle_capture_lang = move |_| {
        let next = capture_lang.get_untracked().toggled();
        let mut switched = false;
        session.update_value(|s| switched = s.set_language(next).is_ok());
        if switched {
            set_capture_lang.set(next);
        }
    };

    view! {
        <div class="voice-input">
            <button
                class="voice-btn"
                class:listening=move || listening.get()
                disabled=move || !available.get()
                title=move || {
                    if available.get() {
                        lang.get().t("বলে যোগ করুন", "Add by voice").to_string()
                    } else {
                        Message::CaptureUnavailable.text(lang.get())
                    }
                }
                on:click=move |_| {
                    if listening.get_untracked() { stop() } else { start() }
                }
            >
                {move || if listening.get() { "⏹" } else { "🎤" }}
            </button>

            <button
                class="capture-lang-btn"
                disabled=move || listening.get()
                on:click=toggle_capture_lang
            >
                {move || capture_lang.get().native_name()}
            </button>

            <Show when=move || listening.get()>
                <div class="voice-transcript">
                    {move || {
                        let text = transcript.get();
                        if text.is_empty() {
                            lang.get().t("শুনছি...", "Listening...").to_string()
                        } else {
                            text
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
