use crate::{
    log::{log_event, LogLevel},
    overlay::ScrollSurface,
    scroll::{scroll_target, SectionId, SectionSpan},
    theme::ThemeMode,
};
use gloo_events::EventListener;
use serde_json::json;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, HtmlLinkElement, ScrollBehavior, ScrollToOptions};

pub fn document() -> Option<Document> {
    window()?.document()
}

fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Writes the canonical theme marker on `<html>` and the matching body
/// colours.
pub fn apply_theme(mode: ThemeMode) {
    let Some(document) = document() else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", mode.as_str());
        let classes = root.class_list();
        let _ = classes.remove_1(mode.toggled().as_str());
        let _ = classes.add_1(mode.as_str());
    }

    if let Some(body) = document.body() {
        let palette = mode.palette();
        let style = body.style();
        let _ = style.set_property("background-color", palette.background);
        let _ = style.set_property("color", palette.foreground);
    }
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

/// Current geometry of every section present in the document, in scan
/// order.
pub fn section_spans() -> Vec<SectionSpan> {
    let Some(document) = document() else {
        return Vec::new();
    };

    SectionId::ALL
        .iter()
        .filter_map(|id| {
            let element = document
                .get_element_by_id(id.anchor())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionSpan {
                id: *id,
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect()
}

/// Smooth-scrolls so `id` sits below the fixed header. Returns `false`
/// when the anchor is missing.
pub fn scroll_to_section(id: SectionId, header_clearance: f64, log_level: LogLevel) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let Some(element) = document().and_then(|d| d.get_element_by_id(id.anchor())) else {
        log_event(
            log_level,
            LogLevel::Debug,
            "navigation_target_missing",
            json!({ "section": id.anchor() }),
        );
        return false;
    };

    let rect_top = element.get_bounding_client_rect().top();
    let page_offset = win.page_y_offset().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(rect_top, page_offset, header_clearance));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
    true
}

pub fn open_mail_client(link: &str) -> bool {
    window()
        .map(|w| w.location().set_href(link).is_ok())
        .unwrap_or(false)
}

pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

/// The body's `overflow` style.
pub struct BodyScrollSurface;

impl ScrollSurface for BodyScrollSurface {
    fn overflow(&self) -> String {
        body()
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let Some(body) = body() else {
            return;
        };

        let style = body.style();
        if value.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", value);
        }
    }
}

/// A `<link rel="stylesheet">` appended to `<head>`, removed on drop.
pub struct StylesheetLink {
    link: Option<HtmlLinkElement>,
    _on_error: Option<EventListener>,
}

impl StylesheetLink {
    pub fn attach(href: &str, log_level: LogLevel) -> Self {
        let link = document().and_then(|document| {
            let head = document.head()?;
            let link = document
                .create_element("link")
                .ok()?
                .dyn_into::<HtmlLinkElement>()
                .ok()?;
            link.set_rel("stylesheet");
            link.set_href(href);
            head.append_child(&link).ok()?;
            Some(link)
        });

        let on_error = link.as_ref().map(|link| {
            let href = href.to_string();
            EventListener::new(link, "error", move |_| {
                log_event(
                    log_level,
                    LogLevel::Debug,
                    "stylesheet_load_failed",
                    json!({ "href": href.as_str() }),
                );
            })
        });

        Self {
            link,
            _on_error: on_error,
        }
    }
}

impl Drop for StylesheetLink {
    fn drop(&mut self) {
        if let Some(link) = self.link.take() {
            if let Some(parent) = link.parent_node() {
                let _ = parent.remove_child(&link);
            }
        }
    }
}
