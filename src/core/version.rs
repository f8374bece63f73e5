use anyhow::{Context, Result};
use colored::Colorize;
use native_tls::TlsConnector;
use serde::Deserialize;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;

/// Repo details
const REPO_OWNER: &str = "stylescan";
const REPO_NAME: &str = "style-scan";

/// GitHub release response
#[derive(Deserialize)]
struct GitHubRelease {
    tag_name: String,
}

/// Fetch the latest release tag from GitHub using raw HTTPS + serde_json
fn get_latest_github_release() -> Result<String> {
    let host = "api.github.com";
    let path = format!("/repos/{}/{}/releases/latest", REPO_OWNER, REPO_NAME);

    // TCP + TLS connection
    let stream = TcpStream::connect((host, 443)).context("Failed to connect to GitHub")?;
    let connector = TlsConnector::new()?;
    let mut stream = connector
        .connect(host, stream)
        .context("TLS handshake failed")?;

    let request = format!(
        "GET {} HTTP/1.1\r\n\
         Host: {}\r\n\
         User-Agent: style-scan-version-checker\r\n\
         Accept: application/json\r\n\
         Connection: close\r\n\r\n",
        path, host
    );
    stream.write_all(request.as_bytes())?;

    // Read the response; the blank line separates headers from body.
    let mut reader = BufReader::new(stream);
    let mut body = String::new();
    let mut in_body = false;

    for line in reader.by_ref().lines() {
        let line = line?;
        if in_body {
            body.push_str(&line);
        } else if line.is_empty() {
            in_body = true;
        }
    }

    let release: GitHubRelease =
        serde_json::from_str(&body).context("Failed to parse GitHub release response")?;
    Ok(release.tag_name)
}

/// Normalize versions for comparison (strip `v` prefixes and whitespace)
fn normalize_version(version: &str) -> String {
    version
        .trim()
        .trim_start_matches(['v', 'V'])
        .to_ascii_lowercase()
}

/// Run the version check and print a small report
pub fn run() {
    let local_version = env!("CARGO_PKG_VERSION");

    println!();
    println!("{}", "Version Check: ".cyan().bold());
    println!("├─ Local version: {}", local_version.bright_yellow().bold());

    match get_latest_github_release() {
        Ok(latest_version) => {
            println!(
                "├─ Latest GitHub release: {}",
                latest_version.bright_green().bold()
            );

            if normalize_version(local_version) != normalize_version(&latest_version) {
                println!(
                    "└─ Update available! (Local: {}, Latest: {})",
                    local_version.red(),
                    latest_version.bright_green()
                );
            } else {
                println!(
                    "{}",
                    "└─ You are running the latest version.".green().bold()
                );
            }
        }
        Err(_) => {
            // Friendly message, not an error
            println!(
                "{}",
                "└─ Could not fetch release information from GitHub \
                 (network issues or no releases yet)."
                    .bright_blue()
                    .bold()
            );
        }
    }
}
