use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use virex_core::contact::{ContactForm, Field, is_field_active};
use virex_core::tween::{Props, Tween};

use super::heading::{SectionHeading, reveal_heading, start};
use crate::icons::Icon;
use crate::{console, motion, use_site};

#[derive(Clone, Debug, PartialEq)]
enum Status {
    Sent,
    Rejected(String),
}

fn group_class(active: bool) -> &'static str {
    if active {
        "contact__form-group contact__form-group--active"
    } else {
        "contact__form-group"
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let contact = use_site().contact.clone();
    let section_ref = NodeRef::<html::Section>::new();
    let info_ref = NodeRef::<html::Div>::new();
    let form_ref = NodeRef::<html::Form>::new();

    let form = RwSignal::new(ContactForm::default());
    let focused = RwSignal::new(None::<Field>);
    let status = RwSignal::new(None::<Status>);

    Effect::new(move || {
        let (Some(section), Some(info), Some(form_el)) =
            (section_ref.get(), info_ref.get(), form_ref.get())
        else {
            return;
        };
        reveal_heading(&section);

        let cards = motion::children(&info);
        let tween = Tween::from_to(Props::hidden().with_x(-50.0), Props::default(), 0.6);
        for card in &cards {
            motion::apply(card, &tween.from);
        }
        motion::on_scroll_enter(info.into(), start("top 80%"), move || {
            for (i, card) in cards.into_iter().enumerate() {
                motion::play(card, tween.delay(i as f64 * 0.15));
            }
        });

        let tween = Tween::from_to(Props::hidden().with_x(50.0), Props::default(), 0.8);
        motion::reveal_on_scroll(form_el.into(), start("top 80%"), tween);
    });

    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();
        let data = form.get_untracked();
        match data.validate() {
            Ok(()) => {
                console::info(&format!("contact form submitted: {}", data.to_json()));
                form.set(ContactForm::default());
                status.set(Some(Status::Sent));
            }
            Err(err) => {
                console::warn(&format!("contact form rejected: {err}"));
                status.set(Some(Status::Rejected(err.to_string())));
            }
        }
    };

    view! {
        <section id="contact" class="contact" node_ref=section_ref>
            <div class="contact__bg">
                <div class="bg-grid"></div>
                <div class="bg-gradient-blur purple" style="top: -10%; right: 20%;"></div>
                <div class="bg-gradient-blur cyan" style="bottom: 10%; left: 10%;"></div>
            </div>

            <div class="container">
                <SectionHeading header=contact.header />

                <div class="contact__wrapper">
                    <div class="contact__info" node_ref=info_ref>
                        {contact
                            .info
                            .into_iter()
                            .map(|info| {
                                view! {
                                    <a href=info.link class="contact__info-card">
                                        <div class="contact__info-icon">
                                            <Icon name=info.icon size=24 />
                                        </div>
                                        <div class="contact__info-content">
                                            <h4>{info.title}</h4>
                                            <p>{info.value}</p>
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()}

                        <div class="contact__social">
                            <h4>"Follow Us"</h4>
                            <div class="contact__social-links">
                                {contact
                                    .social
                                    .into_iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href
                                                class="contact__social-link"
                                                aria-label=social.label
                                            >
                                                <Icon name=social.icon size=20 />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <form class="contact__form" node_ref=form_ref on:submit=on_submit novalidate=true>
                        <div class="contact__form-header">
                            <h3>{contact.form_title}</h3>
                            <p>{contact.form_subtitle}</p>
                        </div>

                        <div class="contact__form-row">
                            <FormField field=Field::Name form=form focused=focused status=status />
                            <FormField field=Field::Email form=form focused=focused status=status />
                        </div>
                        <FormField field=Field::Subject form=form focused=focused status=status />
                        <FormField field=Field::Message form=form focused=focused status=status />

                        <button type="submit" class="btn btn-primary contact__submit">
                            "Send Message"
                            <Icon name="send" size=18 />
                        </button>

                        {move || {
                            status
                                .get()
                                .map(|status| {
                                    let (class, text) = match status {
                                        Status::Sent => {
                                            (
                                                "contact__status contact__status--sent",
                                                "Thanks! We'll get back to you within 24 hours."
                                                    .to_string(),
                                            )
                                        }
                                        Status::Rejected(reason) => {
                                            ("contact__status contact__status--error", reason)
                                        }
                                    };
                                    view! { <p class=class>{text}</p> }
                                })
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}

/// Floating-label input bound to one field of the form.
#[component]
fn FormField(
    field: Field,
    form: RwSignal<ContactForm>,
    focused: RwSignal<Option<Field>>,
    status: RwSignal<Option<Status>>,
) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let active = move || form.with(|f| is_field_active(focused.get(), field, f.get(field)));
    let on_input = move |event: ev::Event| {
        form.update(|f| f.set(field, event_target_value(&event)));
        status.set(None);
    };

    let input = match field {
        Field::Message => view! {
            <textarea
                name=field.id()
                id=field.id()
                rows="5"
                required=true
                prop:value=value
                on:input=on_input
                on:focus=move |_| focused.set(Some(field))
                on:blur=move |_| focused.set(None)
            ></textarea>
        }
        .into_any(),
        _ => view! {
            <input
                type=if field == Field::Email { "email" } else { "text" }
                name=field.id()
                id=field.id()
                required=true
                prop:value=value
                on:input=on_input
                on:focus=move |_| focused.set(Some(field))
                on:blur=move |_| focused.set(None)
            />
        }
        .into_any(),
    };

    view! {
        <div class=move || group_class(active())>
            {input}
            <label for=field.id()>{field.label()}</label>
            <span class="contact__form-line"></span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::group_class;

    #[test]
    fn active_group_raises_label() {
        assert_eq!(group_class(true), "contact__form-group contact__form-group--active");
        assert_eq!(group_class(false), "contact__form-group");
    }
}
