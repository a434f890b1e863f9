use super::dom;
use crate::{
    backdrop::{pointer_glow_style, pointer_percent},
    config::{TypingTimings, ViewConfig},
    log::{log_event, LogLevel},
    schedule::TimeoutScheduler,
    scroll::{FrameGate, ScrollTracker, SectionId},
    theme::{ThemeCoordinator, ThemeMode},
    typing::{TypingAnimator, TypingLoop},
};
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use serde_json::json;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

#[hook]
pub fn use_view_config() -> ViewConfig {
    use_context::<ViewConfig>().unwrap_or_default()
}

/// Local mirror of the shared theme mode. Subscribes on mount and releases
/// the subscription on unmount.
#[hook]
pub fn use_theme_mode() -> ThemeMode {
    let coordinator = use_context::<ThemeCoordinator>();
    let mirror = use_state(|| {
        coordinator
            .as_ref()
            .map(ThemeCoordinator::current_mode)
            .unwrap_or(ThemeMode::Dark)
    });

    {
        let mirror = mirror.clone();
        use_effect_with(coordinator, move |coordinator| {
            let subscription = coordinator.as_ref().map(|coordinator| {
                mirror.set(coordinator.current_mode());
                coordinator.subscribe(move |mode| mirror.set(mode))
            });
            move || drop(subscription)
        });
    }

    *mirror
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScrollSnapshot {
    pub scrolled: bool,
    pub active: SectionId,
}

/// Navbar visibility and highlighted section, sampled at most once per
/// animation frame.
#[hook]
pub fn use_scroll_snapshot(threshold: f64, probe_offset: f64) -> ScrollSnapshot {
    let snapshot = use_state(|| ScrollSnapshot {
        scrolled: false,
        active: SectionId::Home,
    });

    {
        let snapshot = snapshot.clone();
        use_effect_with((threshold, probe_offset), move |(threshold, probe_offset)| {
            let tracker = Rc::new(RefCell::new(ScrollTracker::new(*threshold, *probe_offset)));
            let gate = Rc::new(RefCell::new(FrameGate::default()));
            let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();

            let sample: Rc<dyn Fn()> = Rc::new(move || {
                let mut tracker = tracker.borrow_mut();
                if tracker.sample(dom::scroll_y(), dom::section_spans()).any() {
                    snapshot.set(ScrollSnapshot {
                        scrolled: tracker.scrolled(),
                        active: tracker.active(),
                    });
                }
            });
            sample();

            let listener = window().map(|win| {
                let frame = Rc::clone(&frame);
                EventListener::new(&win, "scroll", move |_| {
                    if !gate.borrow_mut().request() {
                        return;
                    }
                    let gate = Rc::clone(&gate);
                    let sample = Rc::clone(&sample);
                    let handle = request_animation_frame(move |_| {
                        gate.borrow_mut().take();
                        sample();
                    });
                    *frame.borrow_mut() = Some(handle);
                })
            });

            move || {
                drop(listener);
                frame.borrow_mut().take();
            }
        });
    }

    *snapshot
}

/// Current text of the typing animation. The loop is cancelled when the
/// calling component unmounts.
#[hook]
pub fn use_typing_text(words: Vec<String>, timings: TypingTimings, log_level: LogLevel) -> String {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with(words, move |words| {
            let typing_loop = match TypingAnimator::new(words.clone(), timings) {
                Ok(animator) => {
                    let typing_loop =
                        TypingLoop::new(animator, TimeoutScheduler, move |next| text.set(next));
                    typing_loop.start();
                    Some(typing_loop)
                }
                Err(error) => {
                    log_event(
                        log_level,
                        LogLevel::Info,
                        "typing_disabled",
                        json!({ "reason": error.to_string() }),
                    );
                    None
                }
            };
            move || drop(typing_loop)
        });
    }

    (*text).clone()
}

/// Inline style for the radial glow that trails the pointer.
#[hook]
pub fn use_pointer_glow() -> String {
    let position = use_state(|| (0.0_f64, 0.0_f64));

    {
        let position = position.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let (width, height) = dom::viewport_size();
                    position.set((
                        pointer_percent(f64::from(event.client_x()), width),
                        pointer_percent(f64::from(event.client_y()), height),
                    ));
                })
            });
            move || drop(listener)
        });
    }

    pointer_glow_style(position.0, position.1)
}
