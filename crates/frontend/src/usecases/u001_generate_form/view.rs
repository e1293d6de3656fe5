use super::api::generate_form;
use super::view_model::GenerateFormVm;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_generate_form::GenerateForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn GenerateFormPage() -> impl IntoView {
    let vm = GenerateFormVm::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(vm.submit(generate_form));
    };

    view! {
        <PageFrame
            page_id=page_id(&GenerateForm::full_name(), PAGE_CAT_USECASE)
            category=PAGE_CAT_USECASE
            style="padding: 2rem;"
        >
            <h1>{GenerateForm::display_name()}</h1>
            <p>{GenerateForm::description()}</p>

            <form on:submit=on_submit>
                <textarea
                    prop:value=move || vm.prompt.get()
                    on:input=move |ev| vm.prompt.set(event_target_value(&ev))
                    placeholder="Describe the form you want to create..."
                    style="width: 100%; min-height: 120px; padding: 10px; font-size: 16px;"
                ></textarea>
                <button
                    type="submit"
                    disabled=move || vm.is_generating.get()
                    style="margin-top: 10px; padding: 10px 20px; font-size: 16px;"
                >
                    {move || if vm.is_generating.get() { "Generating..." } else { "Generate Form" }}
                </button>
            </form>

            <Show when=move || vm.error.get().is_some()>
                <p style="color: red;">{move || vm.error.get().unwrap_or_default()}</p>
            </Show>
        </PageFrame>
    }
}
