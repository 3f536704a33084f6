use crate::analytics::{track_event, LabEvent};
use crate::feedback::client;
use crate::feedback::{FeedbackRecord, FeedbackSubmission};
use leptos::*;

#[derive(Debug, Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

/// Raw text of the form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct FeedbackDraft {
    pub name: String,
    pub designation: String,
    pub institute: String,
    pub query: String,
    pub suggestion: String,
    pub platform_discovery: String,
}

fn optional(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

impl FeedbackDraft {
    /// Blank optional fields are left out of the request entirely.
    pub fn to_submission(&self) -> FeedbackSubmission {
        FeedbackSubmission {
            name: Some(self.name.trim().to_string()),
            designation: Some(self.designation.trim().to_string()),
            institute: Some(self.institute.trim().to_string()),
            query: Some(self.query.trim().to_string()),
            suggestion: optional(&self.suggestion),
            platform_discovery: optional(&self.platform_discovery),
        }
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                id=id
                rows="4"
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                type="text"
                id=id
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_view()
    };
    view! {
        <div class="control-group">
            <label for=id>{label} {required.then_some(" *")}</label>
            {input}
        </div>
    }
}

#[component]
pub fn FeedbackForm() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let designation = create_rw_signal(String::new());
    let institute = create_rw_signal(String::new());
    let query = create_rw_signal(String::new());
    let suggestion = create_rw_signal(String::new());
    let platform_discovery = create_rw_signal(String::new());
    let (status, set_status) = create_signal(SubmitStatus::Idle);

    let draft = move || FeedbackDraft {
        name: name.get_untracked(),
        designation: designation.get_untracked(),
        institute: institute.get_untracked(),
        query: query.get_untracked(),
        suggestion: suggestion.get_untracked(),
        platform_discovery: platform_discovery.get_untracked(),
    };

    let clear = move || {
        for field in [name, designation, institute, query, suggestion, platform_discovery] {
            field.set(String::new());
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SubmitStatus::Sending {
            return;
        }
        let submission = draft().to_submission();
        // Same check the server runs, so obvious gaps never leave the page
        if let Err(e) = submission.clone().validate() {
            set_status.set(SubmitStatus::Failed(e.to_string()));
            return;
        }
        set_status.set(SubmitStatus::Sending);
        spawn_local(async move {
            match client::submit_feedback(&submission).await {
                Ok(message) => {
                    track_event(LabEvent::FeedbackSubmitted);
                    clear();
                    set_status.set(SubmitStatus::Sent(message));
                }
                Err(e) => set_status.set(SubmitStatus::Failed(e)),
            }
        });
    };

    view! {
        <form class="widget feedback-form" on:submit=on_submit>
            <h3>"Send us feedback"</h3>
            <TextField id="fb-name" label="Name" value=name required=true/>
            <TextField id="fb-designation" label="Designation" value=designation required=true/>
            <TextField id="fb-institute" label="Institute" value=institute required=true/>
            <TextField id="fb-query" label="Query" value=query required=true multiline=true/>
            <TextField id="fb-suggestion" label="Suggestion" value=suggestion multiline=true/>
            <TextField
                id="fb-discovery"
                label="How did you find EM Lab?"
                value=platform_discovery
            />
            <button type="submit" class="reset-button" disabled=move || status.get() == SubmitStatus::Sending>
                {move || if status.get() == SubmitStatus::Sending { "Sending\u{2026}" } else { "Submit" }}
            </button>
            {move || match status.get() {
                SubmitStatus::Sent(msg) => view! { <p class="form-status ok">{msg}</p> }.into_view(),
                SubmitStatus::Failed(msg) => view! { <p class="form-status error">{msg}</p> }.into_view(),
                _ => ().into_view(),
            }}
        </form>
    }
}

fn format_timestamp(record: &FeedbackRecord) -> String {
    record.created_at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Every stored submission, newest first.
#[component]
pub fn FeedbackList() -> impl IntoView {
    let (refresh, set_refresh) = create_signal(0u32);
    let records = create_local_resource(move || refresh.get(), |_| client::list_feedback());

    view! {
        <div class="widget feedback-list">
            <div class="feedback-list-header">
                <h3>"Received feedback"</h3>
                <button class="unit-toggle" on:click=move |_| set_refresh.update(|n| *n += 1)>
                    "Refresh"
                </button>
            </div>
            <Suspense fallback=|| view! { <p>"Loading\u{2026}"</p> }>
                {move || records.get().map(|result| match result {
                    Err(e) => view! { <p class="form-status error">{e}</p> }.into_view(),
                    Ok(list) if list.is_empty() => view! { <p>"No feedback yet."</p> }.into_view(),
                    Ok(list) => view! {
                        <table class="feedback-table">
                            <thead>
                                <tr>
                                    <th>"Received"</th>
                                    <th>"Name"</th>
                                    <th>"Designation"</th>
                                    <th>"Institute"</th>
                                    <th>"Query"</th>
                                    <th>"Suggestion"</th>
                                    <th>"Found via"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|r| view! {
                                    <tr>
                                        <td>{format_timestamp(&r)}</td>
                                        <td>{r.name}</td>
                                        <td>{r.designation}</td>
                                        <td>{r.institute}</td>
                                        <td>{r.query}</td>
                                        <td>{r.suggestion.unwrap_or_default()}</td>
                                        <td>{r.platform_discovery.unwrap_or_default()}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_view(),
                })}
            </Suspense>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackError;

    fn filled() -> FeedbackDraft {
        FeedbackDraft {
            name: " Ada ".to_string(),
            designation: "Student".to_string(),
            institute: "MIT".to_string(),
            query: "How is V defined?".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_optionals_are_omitted() {
        let sub = filled().to_submission();
        assert_eq!(sub.name.as_deref(), Some("Ada"));
        assert_eq!(sub.suggestion, None);
        assert_eq!(sub.platform_discovery, None);
        let json = serde_json::to_string(&sub).unwrap();
        assert!(!json.contains("suggestion"));
    }

    #[test]
    fn test_optionals_are_sent_when_filled() {
        let draft = FeedbackDraft {
            platform_discovery: "Friend".to_string(),
            ..filled()
        };
        let json = serde_json::to_string(&draft.to_submission()).unwrap();
        assert!(json.contains(r#""platformDiscovery":"Friend""#));
    }

    #[test]
    fn test_empty_required_field_fails_locally() {
        let draft = FeedbackDraft {
            institute: "   ".to_string(),
            ..filled()
        };
        let err = draft.to_submission().validate().unwrap_err();
        assert!(matches!(err, FeedbackError::MissingField("institute")));
    }
}
