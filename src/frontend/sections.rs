use super::{dom, hooks, use_social_modal, SocialModal};
use crate::{
    backdrop::{star_field, GRID_STYLE},
    config::DEVICON_STYLESHEET_URL,
    contact::{ContactField, ContactForm},
    content::{Project, SiteContent},
    log::{log_event, LogLevel},
    scroll::SectionId,
};
use hooks::{use_pointer_glow, use_theme_mode, use_typing_text, use_view_config};
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SiteProps {
    pub site: Rc<SiteContent>,
}

#[derive(Properties, PartialEq)]
struct BackgroundProps {
    dark: bool,
}

/// Twinkling star field in dark mode, a faint grid in light mode.
#[function_component(BackgroundAnimation)]
fn background_animation(props: &BackgroundProps) -> Html {
    let config = use_view_config();
    let stars = use_memo(config.star_count, |count| star_field(*count, dom::random_unit));

    if !props.dark {
        return html! {
            <div class="backdrop backdrop-grid" style={GRID_STYLE} aria-hidden="true" />
        };
    }

    html! {
        <div class="backdrop backdrop-stars" aria-hidden="true">
            { for stars.iter().map(|star| html! {
                <span class="star" style={star.style()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SourceProfileLinkProps {
    href: AttrValue,
}

/// Outbound link to the code hosting profile.
#[function_component(SourceProfileLink)]
fn source_profile_link(props: &SourceProfileLinkProps) -> Html {
    let mode = use_theme_mode();

    html! {
        <a class={classes!("cta", mode.as_str())} href={props.href.clone()} target="_blank" rel="noopener noreferrer">
            {"View My Work "}
            <span class="cta-arrow" aria-hidden="true">{"→"}</span>
        </a>
    }
}

#[function_component(Hero)]
pub fn hero(props: &SiteProps) -> Html {
    let config = use_view_config();
    let mode = use_theme_mode();
    let glow = use_pointer_glow();
    let typed = use_typing_text(props.site.typing_words.clone(), config.typing, config.log_level);
    let (modal_open, on_open, on_close) = use_social_modal();

    let profile = &props.site.profile;
    let status = &props.site.status;

    html! {
        <section id={SectionId::Home.anchor()} class={classes!("hero", mode.as_str())}>
            <BackgroundAnimation dark={mode.is_dark()} />
            if mode.is_dark() {
                <div class="pointer-glow" style={glow} aria-hidden="true" />
            }

            <div class="hero-inner">
                <div class={classes!("status-badge", mode.as_str())}>
                    <span class={status.dot_class()} />
                    <span>{status.text()}</span>
                </div>

                <h1 class="hero-title">
                    <span class="hero-first">{profile.first_name.clone()}</span>
                    <span class="hero-full">{profile.full_name.clone()}</span>
                </h1>

                <h2 class="hero-typing">
                    {"I'm a "}
                    <span class="typed">{typed}</span>
                    <span class="cursor" aria-hidden="true">{"|"}</span>
                </h2>

                <div class="skill-badges">
                    { for props.site.skill_badges.iter().map(|badge| html! {
                        <span key={badge.clone()} class={classes!("skill-badge", mode.as_str())}>{badge.clone()}</span>
                    }) }
                </div>

                <div class="hero-actions">
                    <SourceProfileLink href={profile.source_profile.clone()} />
                    <button class={classes!("cta-outline", mode.as_str())} type="button" onclick={on_open}>
                        {"Connect With Me"}
                    </button>
                </div>
            </div>

            <SocialModal is_open={modal_open} links={props.site.social_links.clone()} on_close={on_close} />
        </section>
    }
}

#[function_component(About)]
pub fn about(props: &SiteProps) -> Html {
    let mode = use_theme_mode();
    let glow = use_pointer_glow();
    let (modal_open, on_open, on_close) = use_social_modal();
    let profile = &props.site.profile;

    html! {
        <section id={SectionId::About.anchor()} class={classes!("about", mode.as_str())}>
            if mode.is_dark() {
                <div class="pointer-glow" style={glow} aria-hidden="true" />
            }
            <div class="about-text">
                <h2>{profile.greeting.clone()}</h2>
                <p>{profile.about.clone()}</p>
                <div class="about-actions">
                    <SourceProfileLink href={profile.source_profile.clone()} />
                    <button class={classes!("cta-outline", mode.as_str())} type="button" onclick={on_open}>
                        {"Get In Touch"}
                    </button>
                </div>
            </div>
            <div class="about-portrait">
                <img src={profile.portrait.clone()} alt={profile.full_name.clone()} loading="lazy" />
            </div>

            <SocialModal is_open={modal_open} links={props.site.social_links.clone()} on_close={on_close} />
        </section>
    }
}

#[function_component(TechStack)]
pub fn tech_stack(props: &SiteProps) -> Html {
    let config = use_view_config();
    let mode = use_theme_mode();

    use_effect_with((), move |_| {
        let stylesheet = dom::StylesheetLink::attach(DEVICON_STYLESHEET_URL, config.log_level);
        move || drop(stylesheet)
    });

    html! {
        <section id={SectionId::Services.anchor()} class={classes!("tech-stack", mode.as_str())}>
            <h2 class="section-title">{"Tech Stack"}</h2>
            <div class="tech-grid">
                { for props.site.tech_categories.iter().map(|category| html! {
                    <div key={category.title.clone()} class={classes!("tech-card", mode.as_str())}>
                        <h3>{category.title.clone()}</h3>
                        <ul class="tech-list">
                            { for category.techs.iter().map(|tech| html! {
                                <li key={tech.name.clone()} class="tech-item">
                                    <i class={classes!(tech.icon.clone(), "colored")} aria-hidden="true" />
                                    <span>{tech.name.clone()}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn project_card(project: &Project, mode_class: &'static str) -> Html {
    html! {
        <article key={project.name.clone()} class={classes!("project-card", mode_class)}>
            <img class="project-image" src={project.image.clone()} alt={project.name.clone()} loading="lazy" />
            <div class="project-body">
                <div class="project-heading">
                    <h3>{project.name.clone()}</h3>
                    <span class="project-date">{project.date.clone()}</span>
                </div>
                <p>{project.description.clone()}</p>
                <ul class="project-features">
                    { for project.features.iter().map(|feature| html! { <li>{feature.clone()}</li> }) }
                </ul>
                <div class="project-tags">
                    { for project.tags.iter().map(|tag| html! { <span class="tag">{tag.clone()}</span> }) }
                </div>
                <a class="project-link" href={project.link.clone()} target="_blank" rel="noopener noreferrer">
                    {"View Project ↗"}
                </a>
            </div>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects(props: &SiteProps) -> Html {
    let mode = use_theme_mode();

    html! {
        <section id={SectionId::Work.anchor()} class={classes!("projects", mode.as_str())}>
            <h2 class="section-title">{"Projects"}</h2>
            <div class="project-grid">
                { for props.site.projects.iter().map(|project| project_card(project, mode.as_str())) }
            </div>
        </section>
    }
}

fn field_edit(event: &Event) -> Option<(ContactField, String)> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((ContactField::parse(&input.name())?, input.value()));
    }
    let area = target.dyn_ref::<HtmlTextAreaElement>()?;
    Some((ContactField::parse(&area.name())?, area.value()))
}

#[function_component(Contact)]
pub fn contact(props: &SiteProps) -> Html {
    let config = use_view_config();
    let mode = use_theme_mode();
    let form = use_state(ContactForm::default);

    let on_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some((field, value)) = field_edit(&event) {
                form.set(form.with(field, value));
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let recipient = props.site.profile.email.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match form.mailto_link(&recipient) {
                Ok(link) => {
                    if dom::open_mail_client(&link) {
                        log_event(config.log_level, LogLevel::Info, "contact_submitted", json!({}));
                        form.set(ContactForm::default());
                    }
                }
                Err(error) => log_event(
                    config.log_level,
                    LogLevel::Debug,
                    "contact_rejected",
                    json!({ "reason": error.to_string() }),
                ),
            }
        })
    };

    html! {
        <section id={SectionId::Contact.anchor()} class={classes!("contact", mode.as_str())}>
            <h2 class="section-title">{"Get In Touch"}</h2>
            <div class="contact-layout">
                <div class="contact-channels">
                    { for props.site.contact_channels.iter().map(|channel| {
                        let target = (!channel.opens_in_place()).then_some("_blank");
                        html! {
                            <a
                                key={channel.title.clone()}
                                class={classes!("contact-channel", mode.as_str())}
                                href={channel.url.clone()}
                                target={target}
                                rel="noopener noreferrer"
                            >
                                <span class="channel-title">{channel.title.clone()}</span>
                                <span class="channel-detail">{channel.detail.clone()}</span>
                            </a>
                        }
                    }) }
                </div>

                <form class={classes!("contact-form", mode.as_str())} onsubmit={on_submit}>
                    <label>
                        <span>{"Name"}</span>
                        <input
                            type="text"
                            name={ContactField::Name.as_str()}
                            required=true
                            value={form.name.clone()}
                            oninput={on_input.clone()}
                        />
                    </label>
                    <label>
                        <span>{"Email"}</span>
                        <input
                            type="email"
                            name={ContactField::Email.as_str()}
                            required=true
                            value={form.email.clone()}
                            oninput={on_input.clone()}
                        />
                    </label>
                    <label>
                        <span>{"Message"}</span>
                        <textarea
                            name={ContactField::Message.as_str()}
                            rows="5"
                            required=true
                            value={form.message.clone()}
                            oninput={on_input}
                        />
                    </label>
                    <button class={classes!("cta", mode.as_str())} type="submit">{"Send Message"}</button>
                </form>
            </div>
        </section>
    }
}
