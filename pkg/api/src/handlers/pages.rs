use axum::response::Html;

/// Liveness probe.
pub async fn healthz() -> &'static str {
    "ok"
}

/// Minimal embedded form page driving the convert endpoints.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>envseal</title>
  <style>
    body { font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
    textarea { width: 100%; height: 12rem; font-family: monospace; }
    input { margin: 0.25rem 0 0.75rem; }
    pre { background: #f4f4f4; padding: 1rem; overflow-x: auto; }
    .diag { color: #b00; }
  </style>
</head>
<body>
  <h1>envseal</h1>
  <p>Paste .env content, get a Kubernetes Secret manifest.</p>
  <label for="env">Env content</label>
  <textarea id="env" placeholder="DB_HOST=localhost"></textarea>
  <div>
    <label for="name">Secret name</label>
    <input id="name" placeholder="my-secret">
    <label for="ns">Namespace</label>
    <input id="ns" placeholder="default">
  </div>
  <button id="convert">Convert</button>
  <button id="download">Download</button>
  <ul id="diagnostics" class="diag"></ul>
  <pre id="output"></pre>
  <script>
    function body() {
      return JSON.stringify({
        env_content: document.getElementById('env').value,
        secret_name: document.getElementById('name').value,
        namespace: document.getElementById('ns').value,
      });
    }
    const opts = { method: 'POST', headers: { 'Content-Type': 'application/json' } };
    document.getElementById('convert').addEventListener('click', async () => {
      const res = await fetch('/api/v1/convert', { ...opts, body: body() });
      const data = await res.json();
      document.getElementById('output').textContent = JSON.stringify(data.manifest, null, 4);
      document.getElementById('diagnostics').innerHTML = data.diagnostics
        .map(d => `<li>line ${d.line}: ${d.message}</li>`).join('');
    });
    document.getElementById('download').addEventListener('click', async () => {
      const res = await fetch('/api/v1/convert/download', { ...opts, body: body() });
      const blob = await res.blob();
      const disposition = res.headers.get('Content-Disposition') || '';
      const match = disposition.match(/filename="(.+)"/);
      const a = document.createElement('a');
      a.href = URL.createObjectURL(blob);
      a.download = match ? match[1] : 'secret.json';
      a.click();
      URL.revokeObjectURL(a.href);
    });
  </script>
</body>
</html>
"#;
