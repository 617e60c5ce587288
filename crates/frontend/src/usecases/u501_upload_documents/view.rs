use super::api;
use super::model::{ChosenFile, SubmitOutcome, UploadForm, UploadNotice};
use crate::shared::components::SectionHeader;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_upload_documents::{
    accept_attribute, UploadDocuments, ACCEPTED_EXTENSIONS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

fn files_from_list(list: &web_sys::FileList) -> Vec<ChosenFile<web_sys::File>> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| ChosenFile::new(file.name(), file.size() as u64, file))
        .collect()
}

fn notice_intent(notice: UploadNotice) -> MessageBarIntent {
    match notice {
        UploadNotice::NothingChosen => MessageBarIntent::Warning,
        UploadNotice::Uploaded => MessageBarIntent::Success,
        UploadNotice::Failed => MessageBarIntent::Error,
    }
}

/// File picker + batch upload card
#[component]
pub fn UploadPage(
    /// Called once after every successful upload
    #[prop(optional)]
    on_upload_success: Option<Callback<()>>,
) -> impl IntoView {
    // web_sys::File is not Send
    let form = RwSignal::new_local(UploadForm::<web_sys::File>::new());
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_file_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            let chosen = input
                .files()
                .map(|list| files_from_list(&list))
                .unwrap_or_default();
            form.update(|f| f.choose(chosen));
            // Clear input so the same files can be picked again
            input.set_value("");
        }
    };

    let handle_choose = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let handle_upload = move |_| {
        let mut to_send = None;
        form.update(|f| to_send = f.begin_submit());
        let Some(files) = to_send else {
            return;
        };

        log::info!("{}: uploading {} file(s)", UploadDocuments::full_name(), files.len());
        spawn_local(async move {
            let result = api::upload_files(files).await;
            match &result {
                Ok(resp) => {
                    if let Some(message) = resp.message() {
                        log::info!("Upload finished: {}", message);
                    }
                    log::debug!("Upload response: {:?}", resp);
                }
                Err(e) => log::error!("Upload failed: {}", e),
            }

            let mut outcome = SubmitOutcome::KeepForRetry;
            form.update(|f| outcome = f.finish(result.map(|_| ())));
            if outcome == SubmitOutcome::RefreshParent {
                if let Some(cb) = on_upload_success {
                    cb.run(());
                }
            }
        });
    };

    let is_uploading = Signal::derive(move || form.with(|f| f.is_uploading()));
    let choose_disabled = Signal::derive(move || !form.with(|f| f.can_choose()));

    view! {
        <div class="card upload-card">
            <SectionHeader
                icon=icon("upload")
                title=UploadDocuments::display_name()
                subtitle=UploadDocuments::description().to_string()
                centered=true
            >
                <div class="upload-card__badges">
                    {ACCEPTED_EXTENSIONS
                        .iter()
                        .map(|ext| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                {ext.to_uppercase()}
                            </Badge>
                        })
                        .collect_view()}
                </div>
            </SectionHeader>

            <input
                type="file"
                multiple=true
                accept=accept_attribute()
                style="display: none;"
                node_ref=file_input_ref
                on:change=handle_file_change
            />

            <div class="upload-card__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=choose_disabled
                    on_click=handle_choose
                >
                    "Choose Files"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !form.with(|f| f.can_submit()))
                    on_click=handle_upload
                >
                    {icon("upload")}
                    {move || if is_uploading.get() { " Uploading..." } else { " Upload" }}
                </Button>
            </div>

            <Show when=move || form.with(|f| !f.files().is_empty())>
                <div class="upload-card__files">
                    <div class="upload-card__files-header">
                        <span class="upload-card__files-title">
                            {move || format!("Selected Files ({})", form.with(|f| f.files().len()))}
                        </span>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            disabled=is_uploading
                            on_click=move |_| form.update(|f| f.reset())
                        >
                            "Clear"
                        </Button>
                    </div>
                    <ul class="upload-card__file-list">
                        <For
                            each=move || form.with(|f| f.summaries())
                            key=|file| file.key.clone()
                            let:file
                        >
                            <li class="upload-card__file">
                                <span class=format!("upload-card__file-icon upload-card__file-icon--{}", file.kind.icon_name())>
                                    {icon(file.kind.icon_name())}
                                </span>
                                <div class="upload-card__file-text">
                                    <span class="upload-card__file-name">{file.name.clone()}</span>
                                    <span class="upload-card__file-size">{file.size_label.clone()}</span>
                                </div>
                            </li>
                        </For>
                    </ul>
                </div>
            </Show>

            <Show when=move || is_uploading.get()>
                <div class="upload-card__progress">
                    <div class="progress-bar progress-bar--indeterminate">
                        <div class="progress-bar__fill"></div>
                    </div>
                    <span class="upload-card__caption">"Processing documents..."</span>
                </div>
            </Show>

            {move || form.with(|f| f.notice()).map(|notice| view! {
                <div class="upload-card__notice">
                    <MessageBar intent=notice_intent(notice)>
                        <span>{notice.text()}</span>
                    </MessageBar>
                </div>
            })}
        </div>
    }
}
