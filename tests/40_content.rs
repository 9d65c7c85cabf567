mod common;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn technologies_sort_alphabetically() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }

    let (_, _, token) = common::register_and_login(server).await?;
    common::create_profile(server, &token).await?;

    let client = reqwest::Client::new();
    for name in ["Zig", "Axum"] {
        let res = client
            .post(format!("{}/api/technologies", server.base_url))
            .bearer_auth(&token)
            .json(&json!({ "name": name, "category": "backend" }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client
        .get(format!("{}/api/technologies", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    let body: Value = res.json().await?;
    let names: Vec<&str> = body["data"]
        .as_array()
        .context("expected array")?
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Axum", "Zig"]);
    Ok(())
}

#[tokio::test]
async fn social_url_scheme_is_validated() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }

    let (_, _, token) = common::register_and_login(server).await?;
    common::create_profile(server, &token).await?;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/socials", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "platform": "github", "url": "git@github.com:x/y.git" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .post(format!("{}/api/socials", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "platform": "github", "url": "https://github.com/x", "position": 1 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn socials_keep_display_order() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }

    let (_, _, token) = common::register_and_login(server).await?;
    common::create_profile(server, &token).await?;

    let client = reqwest::Client::new();
    for (platform, position) in [("mastodon", 2), ("github", 1)] {
        let res = client
            .post(format!("{}/api/socials", server.base_url))
            .bearer_auth(&token)
            .json(&json!({
                "platform": platform,
                "url": format!("https://{}.example.com/me", platform),
                "position": position
            }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client
        .get(format!("{}/api/socials", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    let body: Value = res.json().await?;
    let platforms: Vec<&str> = body["data"]
        .as_array()
        .context("expected array")?
        .iter()
        .filter_map(|s| s["platform"].as_str())
        .collect();
    assert_eq!(platforms, vec!["github", "mastodon"]);
    Ok(())
}

#[tokio::test]
async fn work_experience_dates_are_validated() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }

    let (_, _, token) = common::register_and_login(server).await?;
    common::create_profile(server, &token).await?;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/work-experiences", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "job_title": "Engineer",
            "company": "Initech",
            "start_date": "2023-04-01",
            "end_date": "2021-01-01"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Open-ended current position is fine
    let res = client
        .post(format!("{}/api/work-experiences", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "job_title": "Engineer",
            "company": "Initech",
            "start_date": "2023-04-01"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await?;
    assert!(body["data"]["end_date"].is_null());
    Ok(())
}

#[tokio::test]
async fn work_experiences_sort_most_recent_first() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }

    let (_, _, token) = common::register_and_login(server).await?;
    common::create_profile(server, &token).await?;

    let client = reqwest::Client::new();
    for (company, start) in [("OldCorp", "2015-01-01"), ("NewCorp", "2022-06-01")] {
        let res = client
            .post(format!("{}/api/work-experiences", server.base_url))
            .bearer_auth(&token)
            .json(&json!({
                "job_title": "Engineer",
                "company": company,
                "start_date": start
            }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client
        .get(format!("{}/api/work-experiences", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    let body: Value = res.json().await?;
    let companies: Vec<&str> = body["data"]
        .as_array()
        .context("expected array")?
        .iter()
        .filter_map(|w| w["company"].as_str())
        .collect();
    assert_eq!(companies, vec!["NewCorp", "OldCorp"]);
    Ok(())
}

#[tokio::test]
async fn single_item_reads_are_ownership_checked() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }

    let (_, _, owner_token) = common::register_and_login(server).await?;
    common::create_profile(server, &owner_token).await?;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/technologies", server.base_url))
        .bearer_auth(&owner_token)
        .json(&json!({ "name": "Rust", "category": "backend" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await?;
    let tech_id = body["data"]["id"].as_str().context("missing id")?.to_string();

    // Owner reads it back by id
    let res = client
        .get(format!("{}/api/technologies/{}", server.base_url, tech_id))
        .bearer_auth(&owner_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["name"], "Rust");

    // Unknown id is a 404
    let res = client
        .get(format!(
            "{}/api/technologies/{}",
            server.base_url,
            uuid::Uuid::new_v4()
        ))
        .bearer_auth(&owner_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Someone else's id is a 403
    let (_, _, intruder_token) = common::register_and_login(server).await?;
    common::create_profile(server, &intruder_token).await?;
    let res = client
        .get(format!("{}/api/technologies/{}", server.base_url, tech_id))
        .bearer_auth(&intruder_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn explicit_null_end_date_marks_position_current() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }

    let (_, _, token) = common::register_and_login(server).await?;
    common::create_profile(server, &token).await?;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/work-experiences", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "job_title": "Engineer",
            "company": "Initech",
            "start_date": "2020-01-01",
            "end_date": "2023-06-30"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await?;
    let id = body["data"]["id"].as_str().context("missing id")?.to_string();

    // An update that does not mention end_date keeps it
    let res = client
        .patch(format!("{}/api/work-experiences/{}", server.base_url, id))
        .bearer_auth(&token)
        .json(&json!({ "location": "Remote" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["end_date"], "2023-06-30");

    // An explicit null clears it
    let res = client
        .patch(format!("{}/api/work-experiences/{}", server.base_url, id))
        .bearer_auth(&token)
        .json(&json!({ "end_date": null }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert!(body["data"]["end_date"].is_null());
    Ok(())
}

#[tokio::test]
async fn client_testimonial_crud() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }

    let (_, _, token) = common::register_and_login(server).await?;
    common::create_profile(server, &token).await?;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/clients", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Globex",
            "company": "Globex Corp",
            "feedback": "Delivered on time."
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await?;
    let client_id = body["data"]["id"].as_str().context("missing id")?.to_string();

    let res = client
        .patch(format!("{}/api/clients/{}", server.base_url, client_id))
        .bearer_auth(&token)
        .json(&json!({ "feedback": "Delivered early." }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["feedback"], "Delivered early.");
    assert_eq!(body["data"]["name"], "Globex");

    let res = client
        .delete(format!("{}/api/clients/{}", server.base_url, client_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/api/clients", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    let body: Value = res.json().await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn content_is_isolated_between_accounts() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }

    let (_, _, owner_token) = common::register_and_login(server).await?;
    common::create_profile(server, &owner_token).await?;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/technologies", server.base_url))
        .bearer_auth(&owner_token)
        .json(&json!({ "name": "Rust", "category": "backend" }))
        .send()
        .await?;
    let body: Value = res.json().await?;
    let tech_id = body["data"]["id"].as_str().context("missing id")?.to_string();

    let (_, _, intruder_token) = common::register_and_login(server).await?;
    common::create_profile(server, &intruder_token).await?;

    let res = client
        .delete(format!("{}/api/technologies/{}", server.base_url, tech_id))
        .bearer_auth(&intruder_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Intruder's own list stays empty
    let res = client
        .get(format!("{}/api/technologies", server.base_url))
        .bearer_auth(&intruder_token)
        .send()
        .await?;
    let body: Value = res.json().await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    Ok(())
}
