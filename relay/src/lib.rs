use gloo_net::http::Request;

use serde::{self, Deserialize, Serialize};

pub const URL_SEND_EMAIL: &str = "https://api.emailjs.com/api/v1.0/email/send";

// relay account identifiers, swapped in at deployment time
pub const SERVICE_ID: &str = "YOUR_SERVICE_ID";
pub const TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
pub const PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

// every enquiry from the site lands in this inbox
pub const ENQUIRY_RECIPIENT: &str = "jainsourabh2@johndeere.com";

// the template fields, filled from the contact form
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactMessage {
    pub to_email: String,
    pub from_name: String,
    pub from_email: String,
    pub city: String,
    pub mobile: String,
    pub message: String,
}

// the send endpoint takes the account identifiers alongside the template fields
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendEmailReq {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: ContactMessage,
}

// a status of zero means the request never reached the relay (blocked by the
// browser, CORS, or the network); anything else is the relay saying no
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendFailure {
    Transport,
    Rejected(u16),
}

impl std::fmt::Display for SendFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SendFailure::Transport => write!(f, "request blocked before reaching the relay"),
            SendFailure::Rejected(status) => write!(f, "relay rejected the message (HTTP {status})"),
        }
    }
}

pub fn classify(status: u16) -> SendFailure {
    match status {
        0 => SendFailure::Transport,
        status => SendFailure::Rejected(status),
    }
}

pub async fn send_contact_email(message: &ContactMessage) -> anyhow::Result<()> {
    let req = SendEmailReq {
        service_id: String::from(SERVICE_ID),
        template_id: String::from(TEMPLATE_ID),
        user_id: String::from(PUBLIC_KEY),
        template_params: message.clone(),
    };

    let resp = Request::post(URL_SEND_EMAIL).json(&req)?.send().await?;

    if resp.ok() {
        return Ok(());
    }

    Err(anyhow::Error::msg(classify(resp.status())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            to_email: String::from(ENQUIRY_RECIPIENT),
            from_name: String::from("Asha"),
            from_email: String::from("asha@example.com"),
            city: String::from("Indore"),
            mobile: String::from("8719824566"),
            message: String::from("Requesting a quote for 500 kg."),
        }
    }

    #[test]
    fn send_req_uses_relay_field_names() {
        let req = SendEmailReq {
            service_id: String::from(SERVICE_ID),
            template_id: String::from(TEMPLATE_ID),
            user_id: String::from(PUBLIC_KEY),
            template_params: message(),
        };

        let value = serde_json::to_value(&req).expect("serialize send request");

        assert_eq!(value["service_id"], SERVICE_ID);
        assert_eq!(value["template_id"], TEMPLATE_ID);
        assert_eq!(value["user_id"], PUBLIC_KEY);
        assert_eq!(value["template_params"]["to_email"], ENQUIRY_RECIPIENT);
        assert_eq!(value["template_params"]["from_name"], "Asha");
        assert_eq!(value["template_params"]["mobile"], "8719824566");
    }

    #[test]
    fn status_zero_is_a_transport_failure() {
        assert_eq!(classify(0), SendFailure::Transport);
    }

    #[test]
    fn nonzero_statuses_are_rejections() {
        assert_eq!(classify(400), SendFailure::Rejected(400));
        assert_eq!(classify(403), SendFailure::Rejected(403));
        assert_eq!(classify(500), SendFailure::Rejected(500));
    }
}
