extern crate reqwest;
extern crate serde;
extern crate serde_json;

use crate::result;

// Wire format for an incoming-webhook post. Empty fields are omitted so the
// body matches what Slack expects for untagged attachments.
#[derive(Serialize, Deserialize, Debug)]
pub struct Attachment {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub text: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub color: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub mrkdwn_in: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SlackMessage {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attachments: Vec<Attachment>,
}

// Status plus the body read, which can fail independently of the POST.
type PostOutcome = (u16, result::MetroResult<String>);

pub fn deliver(message: &SlackMessage, webhook_url: &str, debug: bool) -> result::MetroResult<()> {
    return deliver_ext(message, webhook_url, debug, real_post_json_fn);
}

fn deliver_ext(message: &SlackMessage, webhook_url: &str, debug: bool, post_json_fn: fn(&str, String) -> result::MetroResult<PostOutcome>) -> result::MetroResult<()> {
    let body = serde_json::to_string(message)?;

    if debug {
        debug!("Posting to webhook: {}", body);
    }

    let (status, body_result) = post_json_fn(webhook_url, body)?;

    if status < 200 || status > 299 {
        return Err(result::MetroError::DeliveryError(status, body_result?));
    }

    // The post already landed; reading the response back is best-effort.
    if debug {
        match body_result {
            Ok(response_body) => debug!("Webhook response: {}", response_body),
            Err(err) => debug!("Webhook response body unreadable: {}", err),
        }
    }

    return Ok(());
}

fn real_post_json_fn(url: &str, body: String) -> result::MetroResult<PostOutcome> {
    let client = reqwest::blocking::Client::new();
    let response = client.post(url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()?;

    let status = response.status().as_u16();
    let response_body = response.text().map_err(result::MetroError::from);
    return Ok((status, response_body));
}
