use common::session::{CredentialsForm, SIGNUP_FAILED, SIGNUP_REDIRECT_DELAY_MS};
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::credentials::{credentials_form, FormLabels};
use super::FormMsg;
use crate::api::{self, ApiError};
use crate::app::View;

#[derive(Properties, PartialEq, Clone)]
pub struct SignupProps {
    pub on_navigate: Callback<View>,
}

pub enum SignupMsg {
    Form(FormMsg),
    /// The signup request settled.
    Finished(Result<(), ApiError>),
}

impl From<FormMsg> for SignupMsg {
    fn from(msg: FormMsg) -> Self {
        SignupMsg::Form(msg)
    }
}

pub struct SignupComponent {
    form: CredentialsForm,
}

const LABELS: FormLabels = FormLabels {
    heading: "Sign Up",
    submit: "Sign Up",
    submitting: "Signing up...",
    link_prompt: "Already have an account?",
    link_label: "Log in here",
    link_target: View::Login,
};

impl Component for SignupComponent {
    type Message = SignupMsg;
    type Properties = SignupProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: CredentialsForm::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SignupMsg::Form(FormMsg::SetUsername(value)) => self.form.username = value,
            SignupMsg::Form(FormMsg::SetPassword(value)) => self.form.password = value,
            SignupMsg::Form(FormMsg::Submit) => {
                if self.form.submitting {
                    return false;
                }
                match self.form.begin_submit() {
                    Ok(credentials) => {
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            let result = api::auth::signup(&credentials).await;
                            link.send_message(SignupMsg::Finished(result));
                        });
                    }
                    Err(err) => self.form.invalid(err),
                }
            }
            SignupMsg::Finished(Ok(())) => {
                self.form.signup_succeeded();
                // fixed delay; later input does not cancel it
                let on_navigate = ctx.props().on_navigate.clone();
                spawn_local(async move {
                    TimeoutFuture::new(SIGNUP_REDIRECT_DELAY_MS).await;
                    on_navigate.emit(View::Login);
                });
            }
            SignupMsg::Finished(Err(err)) => {
                self.form.failed(Some(err.to_string()), SIGNUP_FAILED)
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        credentials_form(&self.form, &LABELS, ctx.link(), &ctx.props().on_navigate)
    }
}
