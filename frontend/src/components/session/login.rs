use common::session::{CredentialsForm, LOGIN_FAILED};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::credentials::{credentials_form, FormLabels};
use super::FormMsg;
use crate::api::{self, ApiError};
use crate::app::View;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    /// Receives the issued token; the parent persists it and opens the dashboard.
    pub on_login: Callback<String>,
    pub on_navigate: Callback<View>,
}

pub enum LoginMsg {
    Form(FormMsg),
    /// The login request settled; `Ok` carries the issued token.
    Finished(Result<String, ApiError>),
}

impl From<FormMsg> for LoginMsg {
    fn from(msg: FormMsg) -> Self {
        LoginMsg::Form(msg)
    }
}

pub struct LoginComponent {
    form: CredentialsForm,
}

const LABELS: FormLabels = FormLabels {
    heading: "Log In",
    submit: "Log In",
    submitting: "Logging in...",
    link_prompt: "Don't have an account?",
    link_label: "Sign up here",
    link_target: View::Signup,
};

impl Component for LoginComponent {
    type Message = LoginMsg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: CredentialsForm::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginMsg::Form(FormMsg::SetUsername(value)) => self.form.username = value,
            LoginMsg::Form(FormMsg::SetPassword(value)) => self.form.password = value,
            LoginMsg::Form(FormMsg::Submit) => {
                if self.form.submitting {
                    return false;
                }
                match self.form.begin_submit() {
                    Ok(credentials) => {
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            let result = api::auth::login(&credentials).await;
                            link.send_message(LoginMsg::Finished(result));
                        });
                    }
                    Err(err) => self.form.invalid(err),
                }
            }
            LoginMsg::Finished(Ok(token)) => {
                self.form.login_succeeded();
                ctx.props().on_login.emit(token);
            }
            LoginMsg::Finished(Err(err)) => {
                self.form.failed(Some(err.to_string()), LOGIN_FAILED)
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        credentials_form(&self.form, &LABELS, ctx.link(), &ctx.props().on_navigate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_input_maps_into_login_messages() {
        assert!(matches!(
            LoginMsg::from(FormMsg::SetUsername("alice".to_string())),
            LoginMsg::Form(FormMsg::SetUsername(name)) if name == "alice"
        ));
        assert!(matches!(
            LoginMsg::from(FormMsg::Submit),
            LoginMsg::Form(FormMsg::Submit)
        ));
    }
}
