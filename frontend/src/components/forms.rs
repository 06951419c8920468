use leptos::*;

/// A required form control: its raw value and a visual-invalid flag.
#[derive(Clone, Copy)]
pub struct RequiredField {
    pub label: &'static str,
    pub value: RwSignal<String>,
    pub invalid: RwSignal<bool>,
}

impl RequiredField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: create_rw_signal(String::new()),
            invalid: create_rw_signal(false),
        }
    }
}

/// Pre-submission gate over a form's required fields. Validation is
/// synchronous and makes no network call.
#[derive(Clone)]
pub struct FormGate {
    fields: Vec<RequiredField>,
}

impl FormGate {
    pub fn new(fields: Vec<RequiredField>) -> Self {
        Self { fields }
    }

    /// Marks every empty field invalid, clears the flag on filled fields, and
    /// returns whether the form may be submitted.
    pub fn validate(&self) -> bool {
        let mut all_valid = true;
        for field in &self.fields {
            let empty = field.value.get_untracked().is_empty();
            field.invalid.set(empty);
            if empty {
                all_valid = false;
            }
        }
        all_valid
    }

    pub fn fields(&self) -> &[RequiredField] {
        &self.fields
    }
}

fn control_classes(invalid: RwSignal<bool>) -> impl Fn() -> String {
    move || {
        format!(
            "w-full rounded-lg border-2 bg-form-control-bg py-2 px-3 text-sm shadow-sm {}",
            if invalid.get() {
                "border-status-error-border ring-1 ring-status-error-border"
            } else {
                "border-form-control-border"
            }
        )
    }
}

#[component]
pub fn FieldLabel(text: &'static str) -> impl IntoView {
    view! { <label class="text-sm font-bold text-fg-muted ml-1">{text}</label> }
}

#[component]
pub fn DateField(
    field: RequiredField,
    #[prop(optional, into)] id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <FieldLabel text=field.label/>
            <input
                type="date"
                id=id.unwrap_or_default()
                class=control_classes(field.invalid)
                prop:value=move || field.value.get()
                on:input=move |ev| field.value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn SelectField(
    field: RequiredField,
    options: Vec<(&'static str, &'static str)>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <FieldLabel text=field.label/>
            <select
                class=control_classes(field.invalid)
                prop:value=move || field.value.get()
                on:change=move |ev| field.value.set(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {options
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn TextAreaField(field: RequiredField, #[prop(default = 3)] rows: u32) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <FieldLabel text=field.label/>
            <textarea
                rows=rows
                class=control_classes(field.invalid)
                prop:value=move || field.value.get()
                on:input=move |ev| field.value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
