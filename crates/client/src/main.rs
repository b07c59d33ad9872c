//! Comparison client: drives the same scenario against both services and
//! prints the divergence side by side.
//!
//! The point of the exercise is the contrast: the strict service answers
//! every bad input with a distinct error status and leaves state untouched;
//! the lenient one answers 200 to everything and lets state drift.

use anyhow::{Context, Result};
use serde_json::{Value, json};
use uuid::Uuid;

enum Body {
    Json(Value),
    /// Sent verbatim with a JSON content type, to probe parse-failure paths.
    Raw(&'static str),
}

struct Scenario {
    title: &'static str,
    body: Body,
    force_kitchen_fail: bool,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            title: "CASE 1: valid contract payload",
            body: Body::Json(json!({"pizza": "margherita", "quantity": 1})),
            force_kitchen_fail: false,
        },
        Scenario {
            title: "CASE 2: quantity wrong type (string)",
            body: Body::Json(json!({"pizza": "margherita", "quantity": "10"})),
            force_kitchen_fail: false,
        },
        Scenario {
            title: "CASE 3: typo'd pizza name",
            body: Body::Json(json!({"pizza": "salmai", "quantity": 1})),
            force_kitchen_fail: false,
        },
        Scenario {
            title: "CASE 4: unknown pizza",
            body: Body::Json(json!({"pizza": "hawaii", "quantity": 1})),
            force_kitchen_fail: false,
        },
        Scenario {
            title: "CASE 5: sold out pizza",
            body: Body::Json(json!({"pizza": "funghi", "quantity": 1})),
            force_kitchen_fail: false,
        },
        Scenario {
            title: "CASE 6: typo field names + too large",
            body: Body::Json(json!({"pizaa": "salami", "anzahl": "99"})),
            force_kitchen_fail: false,
        },
        Scenario {
            title: "CASE 7: extra field",
            body: Body::Json(json!({"pizza": "margherita", "quantity": 1, "coupon": "FREE"})),
            force_kitchen_fail: false,
        },
        Scenario {
            title: "CASE 8: negative quantity",
            body: Body::Json(json!({"pizza": "margherita", "quantity": -2})),
            force_kitchen_fail: false,
        },
        Scenario {
            title: "CASE 9: order exceeding stock",
            body: Body::Json(json!({"pizza": "salami", "quantity": 5})),
            force_kitchen_fail: false,
        },
        Scenario {
            title: "CASE 10: garbage (non-JSON) body",
            body: Body::Raw("this is not json"),
            force_kitchen_fail: false,
        },
        Scenario {
            title: "CASE 11: forced kitchen fail (state consistency test)",
            body: Body::Json(json!({"pizza": "margherita", "quantity": 1})),
            force_kitchen_fail: true,
        },
    ]
}

struct Service<'a> {
    label: &'static str,
    base_url: &'a str,
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

async fn reset(client: &reqwest::Client, base_url: &str) -> Result<()> {
    client
        .post(format!("{base_url}/reset"))
        .header("X-Request-ID", Uuid::new_v4().to_string())
        .send()
        .await
        .with_context(|| format!("POST {base_url}/reset"))?;
    Ok(())
}

async fn get_json(client: &reqwest::Client, url: &str) -> Result<Value> {
    let res = client
        .get(url)
        .header("X-Request-ID", Uuid::new_v4().to_string())
        .send()
        .await
        .with_context(|| format!("GET {url}"))?;
    let status = res.status();
    res.json()
        .await
        .or_else(|_| Ok(json!({"status_code": status.as_u16()})))
}

async fn post_order(
    client: &reqwest::Client,
    base_url: &str,
    body: &Body,
    force_kitchen_fail: bool,
) -> Result<(u16, Value)> {
    let mut req = client
        .post(format!("{base_url}/order"))
        .header("X-Request-ID", Uuid::new_v4().to_string());
    req = match body {
        Body::Json(payload) => req.json(payload),
        Body::Raw(raw) => req.header("content-type", "application/json").body(*raw),
    };
    if force_kitchen_fail {
        req = req.header("X-Force-Kitchen-Fail", "1");
    }

    let res = req.send().await.with_context(|| format!("POST {base_url}/order"))?;
    let status = res.status().as_u16();
    let body = res.json().await.unwrap_or_else(|_| json!({"body": "not json"}));
    Ok((status, body))
}

async fn run_side(
    client: &reqwest::Client,
    service: &Service<'_>,
    scenario: &Scenario,
) -> Result<()> {
    let inventory_before = get_json(client, &format!("{}/inventory", service.base_url)).await?;
    let kitchen_before = get_json(client, &format!("{}/kitchen", service.base_url)).await?;

    let (status, body) = post_order(
        client,
        service.base_url,
        &scenario.body,
        scenario.force_kitchen_fail,
    )
    .await?;

    let inventory_after = get_json(client, &format!("{}/inventory", service.base_url)).await?;
    let kitchen_after = get_json(client, &format!("{}/kitchen", service.base_url)).await?;

    println!("\n- {}", service.label);
    println!("status={status}");
    println!("{}", pretty(&body));
    println!("inventory_before={}", pretty(&inventory_before["inventory"]));
    println!("inventory_after ={}", pretty(&inventory_after["inventory"]));
    println!("kitchen_before  ={}", pretty(&kitchen_before["tickets"]));
    println!("kitchen_after   ={}", pretty(&kitchen_after["tickets"]));
    Ok(())
}

async fn run_scenario(
    client: &reqwest::Client,
    strict: &Service<'_>,
    lenient: &Service<'_>,
    scenario: &Scenario,
) -> Result<()> {
    reset(client, strict.base_url).await?;
    reset(client, lenient.base_url).await?;

    println!("\n{}", "=".repeat(90));
    println!("{}", scenario.title);
    println!("- payload");
    match &scenario.body {
        Body::Json(payload) => println!("{}", pretty(payload)),
        Body::Raw(raw) => println!("{raw:?}"),
    }
    if scenario.force_kitchen_fail {
        println!("- headers");
        println!("{}", pretty(&json!({"X-Force-Kitchen-Fail": "1"})));
    }

    run_side(client, strict, scenario).await?;
    run_side(client, lenient, scenario).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let strict_url = std::env::var("PIZZERIA_STRICT_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let lenient_url = std::env::var("PIZZERIA_LENIENT_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8001".to_string());

    let strict = Service {
        label: "strict",
        base_url: &strict_url,
    };
    let lenient = Service {
        label: "lenient",
        base_url: &lenient_url,
    };

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()?;

    for scenario in scenarios() {
        run_scenario(&client, &strict, &lenient, &scenario).await?;
    }

    Ok(())
}
