pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>ConflictTracker AI Agent</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
  input { width: 70%; padding: .4rem; }
  pre { white-space: pre-wrap; background: #f5f5f5; padding: 1rem; border-radius: 4px; }
  .error { color: #a00; }
</style>
</head>
<body>
<h1>🛡️ ConflictTracker – Global Conflict Monitoring AI</h1>
<p>Monitor and explain recent political unrest, war, and conflict situations across the world using real-time news and AI analysis.</p>

<h2>📡 Get Latest Conflict News</h2>
<form id="news-form">
  <input id="topic" placeholder="Country, region, or conflict topic (e.g., Iran Israel, Sudan, Kashmir)">
  <button type="submit">🔎 Fetch Conflict News</button>
</form>
<pre id="news"></pre>
<pre id="analysis"></pre>

<hr>
<h2>💬 Ask Anything About Conflicts</h2>
<form id="ask-form">
  <input id="question" placeholder="e.g., Will there be war between X and Y?">
  <button type="submit">Ask</button>
</form>
<pre id="answer"></pre>

<script>
function show(el, section) {
  el.classList.toggle("error", "error" in section);
  el.textContent = section.text ?? section.error;
}

async function post(path, body) {
  const res = await fetch(path, {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(body),
  });
  const type = res.headers.get("content-type") || "";
  if (!type.includes("application/json")) {
    return { error: (await res.text()) || `Request failed (${res.status})` };
  }
  return res.json();
}

document.getElementById("news-form").addEventListener("submit", async (e) => {
  e.preventDefault();
  const topic = document.getElementById("topic").value;
  if (!topic.trim()) return;
  const news = document.getElementById("news");
  const analysis = document.getElementById("analysis");
  news.textContent = "Fetching news and generating insights...";
  analysis.textContent = "";
  const data = await post("/api/news", { topic });
  if (data.error) { show(news, { error: data.error }); return; }
  show(news, data.news);
  show(analysis, data.analysis);
});

document.getElementById("ask-form").addEventListener("submit", async (e) => {
  e.preventDefault();
  const question = document.getElementById("question").value;
  if (!question.trim()) return;
  const answer = document.getElementById("answer");
  answer.textContent = "Analyzing with AI...";
  const data = await post("/api/ask", { question });
  show(answer, data.error ? { error: data.error } : { text: data.answer });
});
</script>
</body>
</html>
"#;
