use serde::Serialize;
use serde_json::{json, Map, Value};

use super::vitals::{Rating, VitalKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactMethod {
    Phone,
    Email,
    Form,
}

/// Business events reported to the analytics backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    PageViewed { page_path: String, page_title: String },
    CocktailViewed { cocktail_name: String, action: String },
    ReservationAttempted { source_section: String },
    ContactSubmitted { method: ContactMethod },
    SectionViewed { section_name: String },
    ScrollDepth { percent: u8 },
    WebVital { metric: VitalKind, value: f64, rating: Rating },
}

impl AnalyticsEvent {
    /// Event name as sent to Google Analytics.
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageViewed { .. } => "page_view",
            AnalyticsEvent::CocktailViewed { .. } => "cocktail_viewed",
            AnalyticsEvent::ReservationAttempted { .. } => "reservation_attempted",
            AnalyticsEvent::ContactSubmitted { method } => match method {
                ContactMethod::Phone => "phone_call_click",
                ContactMethod::Email => "email_click",
                ContactMethod::Form => "contact_form_submit",
            },
            AnalyticsEvent::SectionViewed { .. } => "section_viewed",
            AnalyticsEvent::ScrollDepth { .. } => "scroll_depth",
            AnalyticsEvent::WebVital { .. } => "web_vitals",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageViewed { .. } => "navigation",
            AnalyticsEvent::CocktailViewed { .. } => "cocktails",
            AnalyticsEvent::ReservationAttempted { .. } => "conversion",
            AnalyticsEvent::ContactSubmitted { method } => match method {
                ContactMethod::Form => "conversion",
                _ => "engagement",
            },
            AnalyticsEvent::SectionViewed { .. } => "navigation",
            AnalyticsEvent::ScrollDepth { .. } => "engagement",
            AnalyticsEvent::WebVital { .. } => "performance",
        }
    }

    /// Event parameters, including `event_category` and `event_label`.
    pub fn params(&self) -> Map<String, Value> {
        let (label, extra) = match self {
            AnalyticsEvent::PageViewed {
                page_path,
                page_title,
            } => (
                page_path.clone(),
                json!({ "page_location": page_path, "page_title": page_title }),
            ),
            AnalyticsEvent::CocktailViewed {
                cocktail_name,
                action,
            } => (
                cocktail_name.clone(),
                json!({ "cocktail_name": cocktail_name, "custom_parameter_action": action }),
            ),
            AnalyticsEvent::ReservationAttempted { source_section } => (
                String::from("reservation_intent"),
                json!({ "source_section": source_section, "value": 1 }),
            ),
            AnalyticsEvent::ContactSubmitted { method } => (
                format!("contact_{}", self.method_key(*method)),
                json!({ "contact_method": self.method_key(*method) }),
            ),
            AnalyticsEvent::SectionViewed { section_name } => (
                String::from("scroll_tracking"),
                json!({ "section_name": section_name }),
            ),
            AnalyticsEvent::ScrollDepth { percent } => {
                (format!("{percent}%"), json!({ "percent_scrolled": percent }))
            }
            AnalyticsEvent::WebVital {
                metric,
                value,
                rating,
            } => (
                metric.key().to_uppercase(),
                json!({ "metric_value": value, "metric_rating": rating }),
            ),
        };

        let mut params = Map::new();
        params.insert(String::from("event_category"), json!(self.category()));
        params.insert(String::from("event_label"), json!(label));
        if let Value::Object(extra) = extra {
            params.extend(extra);
        }
        params
    }

    fn method_key(&self, method: ContactMethod) -> &'static str {
        match method {
            ContactMethod::Phone => "phone",
            ContactMethod::Email => "email",
            ContactMethod::Form => "form",
        }
    }

    pub fn web_vital(metric: VitalKind, value: f64) -> Self {
        AnalyticsEvent::WebVital {
            metric,
            value,
            rating: metric.rate(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_names_depend_on_method() {
        let phone = AnalyticsEvent::ContactSubmitted {
            method: ContactMethod::Phone,
        };
        assert_eq!(phone.name(), "phone_call_click");
        assert_eq!(phone.params()["event_label"], "contact_phone");
        assert_eq!(phone.params()["event_category"], "engagement");
    }

    #[test]
    fn cocktail_params() {
        let event = AnalyticsEvent::CocktailViewed {
            cocktail_name: String::from("Blue Ocean"),
            action: String::from("detail_page"),
        };
        let params = event.params();
        assert_eq!(params["event_category"], "cocktails");
        assert_eq!(params["cocktail_name"], "Blue Ocean");
        assert_eq!(params["custom_parameter_action"], "detail_page");
    }

    #[test]
    fn web_vital_is_rated() {
        let event = AnalyticsEvent::web_vital(VitalKind::Cls, 0.3);
        assert_eq!(
            event,
            AnalyticsEvent::WebVital {
                metric: VitalKind::Cls,
                value: 0.3,
                rating: Rating::Poor
            }
        );
        assert_eq!(event.params()["metric_rating"], "poor");
        assert_eq!(event.params()["event_label"], "CLS");
    }
}
