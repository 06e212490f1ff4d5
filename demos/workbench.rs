use anyhow::Result;
use curl_workbench::BuilderSession;

fn main() -> Result<()> {
    let mut session = BuilderSession::new();
    session.set_free_text(
        r#"curl \
    -X POST \
    'https://api.example.com/users' \
    -H 'Content-Type: application/json' \
    -H 'Authorization: Bearer abcd1234' \
    -d '{"name": "John Doe", "email": "john@example.com"}'"#,
    );

    println!("method:  {}", session.method);
    println!("url:     {}", session.url);
    println!("headers: {:?}", session.headers);
    println!("body:\n{}", session.body);

    let execution = session.begin()?;
    println!("\ncopy as curl:\n{}", execution.request.to_curl());
    Ok(())
}
