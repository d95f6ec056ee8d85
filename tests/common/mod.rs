//! Test utilities and helper functions for the rebrand test suite

use anyhow::Result;
use kodegen_tools_rebrand::{Document, DetectionResult, RewriteRequest, detector};
use tempfile::TempDir;

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test HTML document with specified content
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
</head>
<body>
    {}
</body>
</html>"#,
        html_escape::encode_text(title),
        body
    )
}

/// A dashboard-style page with every branding facet present
#[allow(dead_code)]
pub fn create_dashboard_html() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
    <title>Acme Cloud - Dashboard</title>
    <style>.sidebar { width: 240px; }</style>
</head>
<body>
    <aside class="sidebar">
        <div class="sidebar-header">
            <img src="https://cdn.example.com/acme.png" srcset="https://cdn.example.com/acme@2x.png 2x" alt="logo">
            <h2>Acme Cloud</h2>
            <small>Ship it faster</small>
        </div>
        <nav>
            <a href="/"><i class="icon">&#xe88a;</i> Overview</a>
            <a href="/reports">Reports <span class="badge">New</span></a>
            <a href="/settings">Settings</a>
        </nav>
    </aside>
    <main>
        <h1>Welcome back</h1>
        <p>Acme Cloud keeps your data safe.</p>
        <pre>Acme Cloud</pre>
        <script>var productName = "Acme Cloud";</script>
    </main>
    <footer><p>&copy; 2021-2024 Acme Cloud Ltd. All rights reserved.</p></footer>
</body>
</html>"#
        .to_string()
}

/// Detect with the defaults
#[allow(dead_code)]
pub fn detect_html(html: &str) -> DetectionResult {
    detector::detect(&Document::parse(html))
}

/// A request pre-seeded with the document's own detection result
#[allow(dead_code)]
pub fn request_for(html: &str) -> RewriteRequest {
    RewriteRequest::new(html).detected(detect_html(html))
}
