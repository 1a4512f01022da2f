use anyhow::Context;

use crate::bot::event::{BotEvent, LabelAction, PullRequestComment, PullRequestLabelChange};
use crate::github::{GithubRepoName, GithubUser, PullRequestNumber};

/// Subset of a GitHub webhook payload that is interesting for the bot.
/// Every field is optional, the classification decides which of them are required.
#[derive(serde::Deserialize, Debug)]
struct WebhookPayload {
    action: Option<String>,
    pull_request: Option<WebhookPullRequest>,
    label: Option<WebhookLabel>,
    sender: Option<WebhookUser>,
    comment: Option<WebhookComment>,
    issue: Option<WebhookIssue>,
    repository: Option<WebhookRepository>,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookPullRequest {
    number: Option<u64>,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookLabel {
    name: Option<String>,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookUser {
    login: Option<String>,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookComment {
    body: Option<String>,
    user: Option<WebhookUser>,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookIssue {
    number: Option<u64>,
}

#[derive(serde::Deserialize, Debug)]
struct WebhookRepository {
    full_name: Option<String>,
}

/// Classifies a webhook event document.
///
/// Label events take precedence over comments, but only when the payload references a pull
/// request and its action is exactly `labeled` or `unlabeled`. Payloads that miss a required
/// field are [`BotEvent::Unrecognized`]; only a document that is not JSON at all is an error.
pub fn parse_webhook_event(body: &[u8]) -> anyhow::Result<BotEvent> {
    let value: serde_json::Value =
        serde_json::from_slice(body).context("Event document is not valid JSON")?;
    let payload: WebhookPayload = match serde_json::from_value(value) {
        Ok(payload) => payload,
        Err(error) => return Ok(unrecognized(format!("unexpected payload shape: {error}"))),
    };

    if let (Some(pull_request), Some(action)) = (
        payload.pull_request.as_ref(),
        payload.action.as_deref().and_then(LabelAction::from_action),
    ) {
        tracing::debug!("Detected label event: {action:?}");
        return Ok(parse_label_event(&payload, pull_request, action));
    }
    if let Some(comment) = payload.comment.as_ref() {
        tracing::debug!("Detected comment event");
        return Ok(parse_pr_comment(&payload, comment));
    }

    Ok(unrecognized(format!(
        "event type not supported (action: {:?})",
        payload.action
    )))
}

fn parse_label_event(
    payload: &WebhookPayload,
    pull_request: &WebhookPullRequest,
    action: LabelAction,
) -> BotEvent {
    let Some(pr_number) = pull_request.number else {
        return unrecognized("pull_request.number is missing");
    };
    let Some(label) = payload.label.as_ref().and_then(|label| label.name.clone()) else {
        return unrecognized("label.name is missing");
    };
    let Some(actor) = payload.sender.as_ref().and_then(|user| user.login.as_deref()) else {
        return unrecognized("sender.login is missing");
    };
    let Some(repository) = parse_repository_name(payload) else {
        return unrecognized("repository.full_name is missing or invalid");
    };

    BotEvent::Label(PullRequestLabelChange {
        repository,
        action,
        actor: GithubUser::from(actor),
        label,
        pr_number: PullRequestNumber(pr_number),
    })
}

fn parse_pr_comment(payload: &WebhookPayload, comment: &WebhookComment) -> BotEvent {
    let Some(text) = comment.body.clone() else {
        return unrecognized("comment.body is missing");
    };
    let Some(author) = comment.user.as_ref().and_then(|user| user.login.as_deref()) else {
        return unrecognized("comment.user.login is missing");
    };
    let Some(pr_number) = payload.issue.as_ref().and_then(|issue| issue.number) else {
        return unrecognized("issue.number is missing");
    };
    let Some(repository) = parse_repository_name(payload) else {
        return unrecognized("repository.full_name is missing or invalid");
    };

    BotEvent::Comment(PullRequestComment {
        repository,
        author: GithubUser::from(author),
        pr_number: PullRequestNumber(pr_number),
        text,
    })
}

fn parse_repository_name(payload: &WebhookPayload) -> Option<GithubRepoName> {
    payload
        .repository
        .as_ref()
        .and_then(|repository| repository.full_name.as_deref())
        .and_then(GithubRepoName::from_full_name)
}

fn unrecognized(reason: impl Into<String>) -> BotEvent {
    BotEvent::Unrecognized {
        reason: reason.into(),
    }
}
