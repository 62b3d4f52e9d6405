use odpt_api::Configuration;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("ODPT_CONSUMER_KEY")?;
    let config = Configuration::data_center(key.clone());

    // Make the request manually to see the actual structure
    let url = format!(
        "{}/odpt:Railway?odpt:operator=odpt.Operator:Toei&acl:consumerKey={}",
        config.base_path, key
    );

    let response = config.client.get(&url).send().await?;

    let json: Value = response.json().await?;
    println!("Raw JSON structure:");
    println!("{}", serde_json::to_string_pretty(&json)?);

    Ok(())
}
