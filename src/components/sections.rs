//! Content sections and footer.
//!
//! Every section carries an `id` matched by a nav link and the `section`
//! class picked up by the reveal observer. Cards and tag chips are focusable
//! and respond to Enter or Space like a click.

use leptos::prelude::*;

use crate::components::{activate_on_key, pointer_tilt};
use crate::data::{ABOUT, ACHIEVEMENTS, CONTACTS, EDUCATION, OWNER, PROJECTS, SKILL_GROUPS};
use crate::util::scroll::Tilt;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <h2 class="section-title">"About"</h2>
            <p class="about-text">{ABOUT}</p>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let groups = SKILL_GROUPS
        .iter()
        .map(|group| {
            let rows = group
                .skills
                .iter()
                .map(|skill| {
                    view! {
                        <div class="bar-row">
                            <span class="bar-label">{skill.name}</span>
                            <div class="bar-track">
                                <div class="bar-fill" style:width=format!("{}%", skill.level)></div>
                            </div>
                        </div>
                    }
                })
                .collect_view();
            view! {
                <div class="skill-group">
                    <h3>{group.title}</h3>
                    {rows}
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="section">
            <h2 class="section-title">"Skills"</h2>
            <div class="skill-grid">{groups}</div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .map(|project| {
            let tags = project
                .tags
                .iter()
                .map(|tag| view! { <li class="tag chip" tabindex="0" on:keydown=activate_on_key>{*tag}</li> })
                .collect_view();
            // No inline transform until the first hover so the reveal
            // transition keeps control of the card.
            let tilt = RwSignal::new(None::<Tilt>);
            view! {
                <article
                    class="project-card"
                    tabindex="0"
                    on:keydown=activate_on_key
                    on:mousemove=move |ev| tilt.set(pointer_tilt(&ev))
                    on:mouseleave=move |_| tilt.set(Some(Tilt::REST))
                    style:transform=move || tilt.get().map(Tilt::transform).unwrap_or_default()
                >
                    <h3>{project.title}</h3>
                    <p>{project.summary}</p>
                    <ul class="tag-list">{tags}</ul>
                    {project.link.map(|href| view! {
                        <a class="project-link" href=href target="_blank" rel="noreferrer">"Source"</a>
                    })}
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="projects" class="section">
            <h2 class="section-title">"Projects"</h2>
            <div class="project-grid">{cards}</div>
        </section>
    }
}

#[component]
pub fn Education() -> impl IntoView {
    let cards = EDUCATION
        .iter()
        .map(|entry| {
            view! {
                <div class="edu-card">
                    <h3>{entry.degree}</h3>
                    <p>{entry.school}</p>
                    <span class="edu-period">{entry.period}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="education" class="section">
            <h2 class="section-title">"Education"</h2>
            {cards}
        </section>
    }
}

#[component]
pub fn Achievements() -> impl IntoView {
    let cards = ACHIEVEMENTS
        .iter()
        .map(|text| view! { <div class="ach-card" tabindex="0" on:keydown=activate_on_key>{*text}</div> })
        .collect_view();

    view! {
        <section id="achievements" class="section">
            <h2 class="section-title">"Achievements"</h2>
            <div class="ach-grid">{cards}</div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let cards = CONTACTS
        .iter()
        .map(|contact| {
            view! {
                <a class="contact-card" href=contact.href tabindex="0" on:keydown=activate_on_key>
                    <span class="contact-label">{contact.label}</span>
                    <span class="contact-value">{contact.value}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <section id="contact" class="section">
            <h2 class="section-title">"Contact"</h2>
            <div class="contact-grid">{cards}</div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{OWNER} " · Built with Rust and Leptos"</p>
        </footer>
    }
}
