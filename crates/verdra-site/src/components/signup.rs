//! Beta signup form

use leptos::*;
use verdra_core::{SignupRequest, SignupState};

use crate::api::{join_beta, signup_failure_message};

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500";

#[component]
pub fn Signup(
    #[prop(default = "Sign Up For Our Launch")] title: &'static str,
    #[prop(default = "Join Beta")] button_text: &'static str,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (organization, set_organization) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (state, set_state) = create_signal(SignupState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = SignupRequest::new(
            name.get_untracked(),
            organization.get_untracked(),
            email.get_untracked(),
        );
        let mut send = false;
        set_state.update(|state| send = state.submit(&request));
        if !send {
            return;
        }

        spawn_local(async move {
            let SignupRequest {
                name,
                organization,
                email,
            } = request;
            let outcome = join_beta(name, organization, email)
                .await
                .map_err(|err| signup_failure_message(&err));
            if outcome.is_ok() {
                set_name.set(String::new());
                set_organization.set(String::new());
                set_email.set(String::new());
            }
            set_state.set(SignupState::settle(outcome));
        });
    };

    let submitting = move || state.with(SignupState::is_submitting);
    let joined = move || state.with(SignupState::is_joined);
    let error = move || state.with(|state| state.error().map(str::to_string));

    view! {
        <section id="signup" class="py-20 bg-gradient-to-b from-white via-emerald-50 to-white">
            <div class="container mx-auto px-4">
                <div class="max-w-xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-bold text-center text-emerald-950 mb-10">{title}</h2>

                    <div class="bg-white rounded-xl shadow-lg p-8">
                        <Show
                            when=move || !joined()
                            fallback=|| view! {
                                <div class="text-center py-10 rounded-lg bg-emerald-50 border border-emerald-200 text-emerald-800">
                                    <h3 class="text-xl font-semibold mb-2">"Thank you for signing up!"</h3>
                                    <p>"We're excited to have you on board. We'll be in touch soon with next steps."</p>
                                </div>
                            }
                        >
                            <form on:submit=on_submit class="space-y-6">
                                <div>
                                    <label for="signup-name" class="block text-sm font-medium text-gray-700 mb-2">"Name"</label>
                                    <input
                                        id="signup-name"
                                        type="text"
                                        class=INPUT_CLASS
                                        placeholder="Your name"
                                        on:input=move |ev| set_name.set(event_target_value(&ev))
                                        prop:value=name
                                    />
                                </div>

                                <div>
                                    <label for="signup-organization" class="block text-sm font-medium text-gray-700 mb-2">"Organization"</label>
                                    <input
                                        id="signup-organization"
                                        type="text"
                                        class=INPUT_CLASS
                                        placeholder="Your company (optional)"
                                        on:input=move |ev| set_organization.set(event_target_value(&ev))
                                        prop:value=organization
                                    />
                                </div>

                                <div>
                                    <label for="signup-email" class="block text-sm font-medium text-gray-700 mb-2">"Email"</label>
                                    <input
                                        id="signup-email"
                                        type="email"
                                        class=INPUT_CLASS
                                        placeholder="you@company.com"
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                        prop:value=email
                                    />
                                </div>

                                {move || {
                                    error().map(|message| {
                                        view! { <p class="text-sm text-red-600" role="alert">{message}</p> }
                                    })
                                }}

                                <button
                                    type="submit"
                                    class="w-full py-4 bg-emerald-600 hover:bg-emerald-700 disabled:opacity-60 text-white font-semibold rounded-lg transition"
                                    disabled=submitting
                                >
                                    {move || if submitting() { "Submitting..." } else { button_text }}
                                </button>
                            </form>
                        </Show>
                    </div>

                    <p class="mt-6 text-sm text-center text-gray-600">
                        "By joining our Beta, you'll be first to experience our platform and have direct influence on future features. We respect your privacy and will never share your information."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let runtime = create_runtime();
        let html = view! { <Signup/> }.into_view().render_to_string().to_string();
        runtime.dispose();

        assert!(html.contains("Sign Up For Our Launch"));
        assert!(html.contains("Join Beta"));
        assert!(html.contains(r#"id="signup""#));
        assert!(!html.contains("Thank you for signing up!"));
    }

    #[test]
    fn test_custom_labels() {
        let runtime = create_runtime();
        let html = view! { <Signup title="Get Early Access" button_text="Count Me In"/> }
            .into_view()
            .render_to_string()
            .to_string();
        runtime.dispose();

        assert!(html.contains("Get Early Access"));
        assert!(html.contains("Count Me In"));
        assert!(!html.contains("Join Beta"));
    }
}
