mod dom;
mod hooks;
mod sections;

use crate::{
    config::ViewConfig,
    content::{SiteContent, SocialLink},
    log::{log_event, LogLevel},
    overlay::{CloseReason, OverlayState, ScrollLock},
    scroll::SectionId,
    theme::{ThemeCoordinator, ThemeMode},
};
use gloo_events::EventListener;
use hooks::{use_scroll_snapshot, use_theme_mode, use_view_config};
use sections::{About, Contact, Hero, Projects, TechStack};
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[function_component(ThemeToggle)]
fn theme_toggle() -> Html {
    let coordinator = use_context::<ThemeCoordinator>();
    let config = use_view_config();
    let mode = use_theme_mode();

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(coordinator) = coordinator.as_ref() {
            let next = coordinator.toggle();
            log_event(
                config.log_level,
                LogLevel::Info,
                "theme_toggled",
                json!({ "mode": next.as_str() }),
            );
        }
    });

    html! {
        <button
            class={classes!("round-button", "theme-toggle", mode.as_str())}
            type="button"
            aria-label={mode.toggle_label()}
            aria-pressed={mode.is_dark().to_string()}
            onclick={onclick}
        >
            <span class={classes!("theme-icon", "sun", mode.is_dark().then_some("is-shown"))} aria-hidden="true">{"☀"}</span>
            <span class={classes!("theme-icon", "moon", (!mode.is_dark()).then_some("is-shown"))} aria-hidden="true">{"☾"}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct ResumeLinkProps {
    href: AttrValue,
    #[prop_or_default]
    compact: bool,
}

#[function_component(ResumeLink)]
fn resume_link(props: &ResumeLinkProps) -> Html {
    let mode = use_theme_mode();

    html! {
        <a
            class={classes!("resume-link", mode.as_str(), props.compact.then_some("round-button"))}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Download Resume"
        >
            <span aria-hidden="true">{"▤"}</span>
            if !props.compact {
                <span class="resume-label">{"Resume"}</span>
            }
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct HeadNavProps {
    active: SectionId,
    on_navigate: Callback<SectionId>,
    #[prop_or_default]
    floating: bool,
}

#[function_component(HeadNav)]
fn head_nav(props: &HeadNavProps) -> Html {
    let mode = use_theme_mode();

    html! {
        <div class={classes!("head-nav", mode.as_str(), props.floating.then_some("is-floating"))}>
            { for SectionId::NAV.iter().map(|id| {
                let id = *id;
                let on_navigate = props.on_navigate.clone();
                html! {
                    <button
                        key={id.anchor()}
                        type="button"
                        class={classes!("head-nav-link", (props.active == id).then_some("is-active"))}
                        aria-current={(props.active == id).then_some("true")}
                        onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(id))}
                    >
                        {id.label()}
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MenuButtonProps {
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(MenuButton)]
fn menu_button(props: &MenuButtonProps) -> Html {
    let mode = use_theme_mode();
    let on_toggle = props.on_toggle.clone();

    html! {
        <button
            class={classes!("round-button", "menu-button", mode.as_str())}
            type="button"
            aria-label="Toggle menu"
            aria-expanded={props.open.to_string()}
            onclick={Callback::from(move |_: MouseEvent| on_toggle.emit(()))}
        >
            <span aria-hidden="true">{ if props.open { "✕" } else { "☰" } }</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    site: Rc<SiteContent>,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let config = use_view_config();
    let mode = use_theme_mode();
    let snapshot = use_scroll_snapshot(config.scroll_threshold, config.section_probe_offset);
    let menu = use_state(OverlayState::default);

    let on_navigate = Callback::from(move |id: SectionId| {
        dom::scroll_to_section(id, config.header_clearance, config.log_level);
    });

    let on_menu_toggle = {
        let menu = menu.clone();
        Callback::from(move |_| menu.set(menu.toggled()))
    };

    let on_menu_navigate = {
        let menu = menu.clone();
        let on_navigate = on_navigate.clone();
        Callback::from(move |id: SectionId| {
            on_navigate.emit(id);
            let (next, _) = menu.closed(CloseReason::Navigation);
            menu.set(next);
        })
    };

    let profile = &props.site.profile;
    let resume = AttrValue::from(profile.resume.clone());

    html! {
        <>
            <nav class={classes!("navbar", mode.as_str(), snapshot.scrolled.then_some("is-collapsed"))}>
                <div class="navbar-row">
                    <a class="brand" href={SectionId::Home.href()}>
                        <img src={profile.logo.clone()} alt="Logo" width="32" height="32" />
                        <span class="brand-name">{profile.brand.clone()}</span>
                    </a>

                    <div class="navbar-center desktop-only">
                        <HeadNav active={snapshot.active} on_navigate={on_navigate.clone()} />
                    </div>

                    <div class="navbar-actions">
                        <ResumeLink href={resume.clone()} />
                        <ThemeToggle />
                        <div class="mobile-only">
                            <MenuButton open={menu.is_open()} on_toggle={on_menu_toggle.clone()} />
                        </div>
                    </div>
                </div>

                <div class={classes!("mobile-menu", mode.as_str(), menu.is_open().then_some("is-open"))}>
                    { for SectionId::NAV.iter().map(|id| {
                        let id = *id;
                        let on_menu_navigate = on_menu_navigate.clone();
                        html! {
                            <button
                                key={id.anchor()}
                                type="button"
                                class={classes!("mobile-menu-link", (snapshot.active == id).then_some("is-active"))}
                                onclick={Callback::from(move |_: MouseEvent| on_menu_navigate.emit(id))}
                            >
                                {id.label()}
                            </button>
                        }
                    }) }
                </div>
            </nav>

            <div class={classes!("floating-nav", "desktop-only", snapshot.scrolled.then_some("is-visible"))}>
                <HeadNav active={snapshot.active} on_navigate={on_navigate} floating={true} />
                <ResumeLink href={resume.clone()} compact={true} />
                <ThemeToggle />
            </div>

            <div class={classes!("floating-nav-mobile", "mobile-only", snapshot.scrolled.then_some("is-visible"))}>
                <ResumeLink href={resume} compact={true} />
                <ThemeToggle />
                <MenuButton open={menu.is_open()} on_toggle={on_menu_toggle} />
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SocialModalProps {
    pub is_open: bool,
    pub links: Vec<SocialLink>,
    pub on_close: Callback<CloseReason>,
}

/// Social links dialog. Holds the page scroll lock while open and closes
/// on Escape, backdrop click or the close button.
#[function_component(SocialModal)]
pub(crate) fn social_modal(props: &SocialModalProps) -> Html {
    let mode = use_theme_mode();
    let scroll_lock = use_context::<ScrollLock>();

    use_effect_with(props.is_open, move |open| {
        let guard = if *open {
            scroll_lock.as_ref().map(ScrollLock::acquire)
        } else {
            None
        };
        move || drop(guard)
    });

    {
        let on_close = props.on_close.clone();
        use_effect_with(props.is_open, move |open| {
            let listener = open.then(dom::document).flatten().map(|document| {
                EventListener::new(&document, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map(|event| event.key() == "Escape")
                        .unwrap_or(false);
                    if is_escape {
                        on_close.emit(CloseReason::Escape);
                    }
                })
            });
            move || drop(listener)
        });
    }

    if !props.is_open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(CloseReason::Backdrop))
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(CloseReason::CloseButton))
    };

    html! {
        <div class="modal-root" role="dialog" aria-modal="true" aria-labelledby="social-modal-title">
            <div class="modal-backdrop" onclick={on_backdrop} />
            <div class={classes!("modal-card", mode.as_str())}>
                <div class="modal-header">
                    <div>
                        <h3 id="social-modal-title">{"Let's Connect"}</h3>
                        <p class="muted">{"Choose your preferred platform"}</p>
                    </div>
                    <button class="modal-close" type="button" aria-label="Close" onclick={on_close_button}>
                        {"✕"}
                    </button>
                </div>
                <div class="modal-links">
                    { for props.links.iter().map(|link| html! {
                        <a
                            key={link.name.clone()}
                            class={classes!("social-link", link.accent.clone())}
                            href={link.url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <span class="social-name">{link.name.clone()}</span>
                            <span class="social-description">{link.description.clone()}</span>
                        </a>
                    }) }
                </div>
            </div>
        </div>
    }
}

/// Owner-side state for a [`SocialModal`]: the open flag plus open/close
/// callbacks that log transitions.
#[hook]
pub(crate) fn use_social_modal() -> (bool, Callback<MouseEvent>, Callback<CloseReason>) {
    let config = use_view_config();
    let modal = use_state(OverlayState::default);

    let on_open = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| {
            modal.set(modal.opened());
            log_event(config.log_level, LogLevel::Debug, "modal_opened", json!({ "modal": "social" }));
        })
    };

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |reason: CloseReason| {
            let (next, closed) = modal.closed(reason);
            modal.set(next);
            if let Some(reason) = closed {
                log_event(
                    config.log_level,
                    LogLevel::Debug,
                    "modal_closed",
                    json!({ "modal": "social", "reason": reason.as_str() }),
                );
            }
        })
    };

    (modal.is_open(), on_open, on_close)
}

#[function_component(App)]
fn app() -> Html {
    let config = ViewConfig::default();
    let coordinator = use_memo((), |_| ThemeCoordinator::new());
    let scroll_lock = use_memo((), |_| ScrollLock::new(Rc::new(dom::BodyScrollSurface)));
    let site = use_memo((), |_| SiteContent::embedded().map(Rc::new));

    use_effect_with((*coordinator).clone(), move |coordinator| {
        dom::apply_theme(coordinator.current_mode());
        let subscription = coordinator.subscribe(move |mode: ThemeMode| {
            dom::apply_theme(mode);
            log_event(
                config.log_level,
                LogLevel::Debug,
                "theme_applied",
                json!({ "mode": mode.as_str() }),
            );
        });
        move || drop(subscription)
    });

    let site = match &*site {
        Ok(site) => Rc::clone(site),
        Err(error) => {
            log_event(
                config.log_level,
                LogLevel::Info,
                "site_content_invalid",
                json!({ "error": error.to_string() }),
            );
            return html! {
                <main class="load-error">
                    <p>{"This page could not be loaded."}</p>
                </main>
            };
        }
    };

    html! {
        <ContextProvider<ViewConfig> context={config}>
            <ContextProvider<ThemeCoordinator> context={(*coordinator).clone()}>
                <ContextProvider<ScrollLock> context={(*scroll_lock).clone()}>
                    <Navbar site={Rc::clone(&site)} />
                    <main id="content">
                        <Hero site={Rc::clone(&site)} />
                        <About site={Rc::clone(&site)} />
                        <TechStack site={Rc::clone(&site)} />
                        <Projects site={Rc::clone(&site)} />
                        <Contact site={site} />
                    </main>
                </ContextProvider<ScrollLock>>
            </ContextProvider<ThemeCoordinator>>
        </ContextProvider<ViewConfig>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
