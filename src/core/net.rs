// src/core/net.rs

// Blocking HTTP GET via reqwest. The wiki is HTTPS-only, one request
// in flight at a time, so a shared blocking client is all we need.

use std::{error::Error, fs::File, io::{BufWriter, Read, Write}, path::Path, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::{DOWNLOAD_CHUNK, HTTP_TIMEOUT_SECS, USER_AGENT};

/// Build the shared client with the scraper's User-Agent and timeouts.
pub fn client() -> Result<Client, Box<dyn Error>> {
    let c = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;
    Ok(c)
}

/// GET a page and return its body as text. Non-2xx is an error.
pub fn get_html(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}

/// GET a binary resource and stream it to `path` in fixed-size chunks.
pub fn download(client: &Client, url: &str, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut resp = client.get(url).send()?.error_for_status()?;

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    let mut buf = [0u8; DOWNLOAD_CHUNK];
    loop {
        let n = resp.read(&mut buf)?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n])?;
    }
    out.flush()?;
    Ok(())
}
