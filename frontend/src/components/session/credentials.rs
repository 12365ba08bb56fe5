//! Shared markup of the signup and login forms.

use common::session::CredentialsForm;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::FormMsg;
use crate::app::View;

pub struct FormLabels {
    pub heading: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub link_prompt: &'static str,
    pub link_label: &'static str,
    pub link_target: View,
}

pub fn credentials_form<C>(
    form: &CredentialsForm,
    labels: &FormLabels,
    link: &Scope<C>,
    on_navigate: &Callback<View>,
) -> Html
where
    C: Component,
    C::Message: From<FormMsg>,
{
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        FormMsg::Submit
    });
    let target = labels.link_target;
    let onclick = on_navigate.reform(move |e: MouseEvent| {
        e.prevent_default();
        target
    });

    html! {
        <div class="container">
            <h2>{ labels.heading }</h2>
            <form {onsubmit}>
                <input
                    type="text"
                    placeholder="Username"
                    value={form.username.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        FormMsg::SetUsername(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                    required={true}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={form.password.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        FormMsg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                    required={true}
                />
                <button type="submit" disabled={form.submitting}>
                    { if form.submitting { labels.submitting } else { labels.submit } }
                </button>
            </form>
            if let Some(message) = &form.message {
                <p class="message">{ message }</p>
            }
            if let Some(error) = &form.error {
                <p class="error">{ error }</p>
            }
            <p class="link-text">
                { labels.link_prompt }{ " " }
                <a href={target.hash()} {onclick}>{ labels.link_label }</a>
            </p>
        </div>
    }
}
