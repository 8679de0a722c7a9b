use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::lead::controller::{LeadController, Notice};
use crate::lead::form::LeadField;
use crate::lead::sender::EmailJsSender;

type ContactController = LeadController<EmailJsSender, Callback<Notice>>;

struct Contact {
    name: &'static str,
    phone: &'static str,
}

const CONTACTS: [Contact; 2] = [
    Contact { name: "Samet Bodur", phone: "+90 553 704 05 18" },
    Contact { name: "Kaan Yıldırım", phone: "+90 551 277 07 27" },
];

/// `name` attribute and current value of the input or textarea that fired.
fn input_name_value(e: &InputEvent) -> Option<(String, String)> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub on_notice: Callback<Notice>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let controller: Rc<ContactController> = {
        let on_notice = props.on_notice.clone();
        use_memo(
            move |_| {
                let sender = EmailJsSender::new(config::get_email_config());
                LeadController::new(sender, on_notice)
            },
            (),
        )
    };
    let update = use_update();

    let oninput = {
        let controller = controller.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let Some((name, value)) = input_name_value(&e) else {
                return;
            };
            match name.parse::<LeadField>() {
                Ok(field) => {
                    controller.update_field(field, value);
                    update();
                }
                Err(e) => warn!("Ignoring input: {}", e),
            }
        })
    };

    let onsubmit = {
        let controller = controller.clone();
        let update = update.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(pending) = controller.submit() {
                update();
                let update = update.clone();
                spawn_local(async move {
                    pending.await;
                    update();
                });
            }
        })
    };

    let fields = controller.fields();
    let is_submitting = controller.form().is_submitting();

    html! {
        <section id="contact" class="section-padding contact-section">
            <div class="luxury-container">
                <div class="two-column">
                    <div>
                        <div class="badge">
                            <span>{"İLETİŞİM"}</span>
                        </div>
                        <h2 class="section-title">
                            {"Hemen"}
                            <br />
                            <span class="gold-text">{"Başlayın"}</span>
                        </h2>
                        <p class="section-subtitle">
                            {"Profesyonel altın ticaret yazılımımız hakkında detaylı bilgi almak ve demo talep etmek için bizimle iletişime geçin."}
                        </p>
                        <div class="contact-cards">
                            { for CONTACTS.iter().map(|contact| html! {
                                <div class="glass-card contact-card">
                                    <div class="contact-icon">{"📞"}</div>
                                    <div>
                                        <div class="contact-label">{"İletişim"}</div>
                                        <div class="contact-name">{contact.name}</div>
                                        <div class="contact-phone">{contact.phone}</div>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="perspective-image contact-image">
                            <img src="https://images.unsplash.com/photo-1572107833346-add549545c63" alt="Gold Trading" loading="lazy" />
                        </div>
                    </div>

                    <form class="glass-card contact-form" {onsubmit}>
                        <label>
                            {"Adınız Soyadınız *"}
                            <input type="text" name={LeadField::Name.as_str()} value={fields.name} oninput={oninput.clone()} required=true />
                        </label>
                        <label>
                            {"E-posta *"}
                            <input type="email" name={LeadField::Email.as_str()} value={fields.email} oninput={oninput.clone()} required=true />
                        </label>
                        <label>
                            {"Telefon *"}
                            <input type="tel" name={LeadField::Phone.as_str()} value={fields.phone} oninput={oninput.clone()} required=true />
                        </label>
                        <label>
                            {"Şirket Adı"}
                            <input type="text" name={LeadField::Company.as_str()} value={fields.company} oninput={oninput.clone()} />
                        </label>
                        <label>
                            {"Mesajınız *"}
                            <textarea name={LeadField::Message.as_str()} value={fields.message} oninput={oninput} rows="4" required=true />
                        </label>
                        <button type="submit" class="btn-gold-primary submit-button" disabled={is_submitting}>
                            { if is_submitting { "Gönderiliyor..." } else { "Gönder ➤" } }
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
