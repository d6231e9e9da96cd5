use crate::prelude::*;

use crate::api::models::{ContractStatus, ProjectStatus, RequestStatus};

/// Anything with a label and a daisyUI badge color
pub trait StatusDisplay: Copy + PartialEq + 'static {
    fn all() -> &'static [Self];
    fn label(self) -> &'static str;
    fn badge_class(self) -> &'static str;
    fn query_value(self) -> String;
}

macro_rules! status_display {
    ($($t:ty),+) => {
        $(
            impl StatusDisplay for $t {
                fn all() -> &'static [Self] {
                    <$t>::ALL
                }
                fn label(self) -> &'static str {
                    <$t>::label(self)
                }
                fn badge_class(self) -> &'static str {
                    <$t>::badge_class(self)
                }
                fn query_value(self) -> String {
                    <$t>::query_value(self)
                }
            }
        )+
    };
}
status_display!(ProjectStatus, ContractStatus, RequestStatus);

#[component]
pub fn StatusBadge<S: StatusDisplay>(status: S) -> Element {
    rsx! {
        span { class: "badge badge-sm text-nowrap {status.badge_class()}", {status.label()} }
    }
}

/// `(query value, label)` pairs of every status, as expected by filter selects
pub fn status_options<S: StatusDisplay>() -> Vec<(String, &'static str)> {
    S::all()
        .iter()
        .map(|s| (s.query_value(), s.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_declaration_order() {
        let options = status_options::<ContractStatus>();
        assert_eq!(options.len(), ContractStatus::ALL.len());
        assert_eq!(options[0].1, ContractStatus::Pending.label());
        assert_eq!(
            ContractStatus::from_query_value(&options[0].0),
            Some(ContractStatus::Pending)
        );
    }
}
