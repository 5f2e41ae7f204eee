//! HTML templates for the web interface.

/// Base HTML template.
pub fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Dealsight</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    {}
    <script src="/static/app.js"></script>
</body>
</html>"#,
        title, content
    )
}

/// Render the login page, optionally with an inline error message.
pub fn login_page(error: Option<&str>) -> String {
    let error_html = match error {
        Some(msg) => format!(r#"<p class="error">{}</p>"#, msg),
        None => String::new(),
    };

    let content = format!(
        r#"<main class="login">
        <h1>Dealsight</h1>
        {}
        <form method="post" action="/login">
            <label for="password">Password</label>
            <input type="password" id="password" name="password" autofocus>
            <button type="submit">Log in</button>
        </form>
    </main>"#,
        error_html
    );

    base_template("Login", &content)
}

/// Render the main application page.
pub fn index_page() -> String {
    let content = r#"<header id="main-header">
        <nav>
            <span class="logo">Dealsight</span>
            <a href="/logout">log out</a>
        </nav>
    </header>
    <main>
        <section id="upload-section">
            <h2>Listing Screenshot</h2>
            <input type="file" id="imageUpload" accept="image/*" onchange="previewImage(this)">
            <img id="uploadedImage" style="display: none;" alt="Uploaded listing">
            <button onclick="processImage()">Extract Financials</button>
        </section>
        <section id="financials-section">
            <h2>Financials</h2>
            <label>Asking Price <input type="text" id="askingPrice"></label>
            <label>EBITDA <input type="text" id="ebitda"></label>
            <label>Gross Revenue <input type="text" id="grossRevenue"></label>
            <label>Cash Flow <input type="text" id="cashFlow"></label>
            <label>Inventory <input type="text" id="inventory"></label>
            <label>Real Estate <input type="text" id="realEstate"></label>
            <label>FF&amp;E <input type="text" id="ffe"></label>
            <button onclick="calculate()">Calculate</button>
            <button onclick="confirmClearAll()">Clear All</button>
        </section>
        <section id="results"></section>
        <div id="businessTypeModal" class="modal">
            <div class="modal-content">
                <span class="close">&times;</span>
                <h2>What kind of business is this?</h2>
                <input type="text" id="businessType" placeholder="e.g. laundromat">
                <button onclick="analyzeBusinessPurchase()">Analyze</button>
            </div>
        </div>
    </main>"#;

    base_template("Analyze", content)
}
