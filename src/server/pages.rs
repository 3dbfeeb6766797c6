//! Static HTML pages.
//!
//! The index, gallery, and viewer views are all rendered client-side by the
//! shell page from the JSON API (`/api/all-folders`, `/api/cover-image`,
//! `/list`, `/api/metadata`, `/api/update-tags`), so none of these pages
//! interpolate user or filesystem data on the server. The shell script
//! escapes every title and filename before inserting it into the DOM and
//! uses `encodeURIComponent` when building URLs.

/// The application shell served at `/`.
pub const SHELL_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Manga Shelf</title>
  <style>
    body { font-family: sans-serif; background: #f2f2f2; margin: 0; padding: 2em; }
    h1 { text-align: center; }
    h1 a { color: inherit; text-decoration: none; }
    .gallery, .thumbs { display: flex; flex-wrap: wrap; gap: 1.5em; justify-content: center; }
    .item { width: 160px; text-align: center; }
    .item img, .item .placeholder {
      width: 100%; height: 200px; object-fit: cover;
      border: 1px solid #ccc; border-radius: 8px; background: white;
    }
    .item .placeholder { background: #ddd; }
    .item a { text-decoration: none; color: #333; display: block; margin-top: 0.5em; }
    .item .tags { color: #888; font-size: 0.8em; min-height: 1em; }
    .thumb { width: 120px; cursor: pointer; }
    .thumb img { width: 100%; border: 1px solid #aaa; border-radius: 4px; }
    .tag-editor { text-align: center; margin: 1em 0; }
    .tag-editor input { width: 20em; }
    #viewer { text-align: center; }
    #viewer img { max-width: 100%; max-height: 85vh; }
    #viewer nav { margin: 1em 0; }
    #viewer nav a { margin: 0 1em; cursor: pointer; color: #06c; }
  </style>
</head>
<body>
  <h1><a href="#/">Manga Shelf</a></h1>
  <div id="content"></div>
  <script>
    "use strict";

    const content = document.getElementById("content");

    function esc(s) {
      const div = document.createElement("div");
      div.textContent = s;
      return div.innerHTML;
    }

    async function getJson(url) {
      const res = await fetch(url);
      if (res.redirected) { window.location.href = res.url; throw new Error("unauthenticated"); }
      if (!res.ok) throw new Error(url + " -> " + res.status);
      return res.json();
    }

    async function renderIndex() {
      const [titles, metadata] = await Promise.all([
        getJson("/api/all-folders"),
        getJson("/api/metadata"),
      ]);

      content.innerHTML = '<div class="gallery"></div>';
      const grid = content.querySelector(".gallery");

      for (const title of titles) {
        const item = document.createElement("div");
        item.className = "item";
        const tags = (metadata[title] && metadata[title].tags) || [];
        item.innerHTML =
          '<a href="#/gallery/' + encodeURIComponent(title) + '">' +
          '<span class="cover"><div class="placeholder"></div></span>' +
          '<span>' + esc(title) + '</span>' +
          '</a>' +
          '<div class="tags">' + esc(tags.join(", ")) + '</div>';
        grid.appendChild(item);

        getJson("/api/cover-image?title=" + encodeURIComponent(title))
          .then((body) => {
            const img = document.createElement("img");
            img.src = body.cover;
            img.alt = title;
            item.querySelector(".cover").replaceChildren(img);
          })
          .catch(() => {});
      }
    }

    async function renderGallery(title) {
      const [files, metadata] = await Promise.all([
        getJson("/list?title=" + encodeURIComponent(title)),
        getJson("/api/metadata"),
      ]);
      const tags = (metadata[title] && metadata[title].tags) || [];

      content.innerHTML =
        '<h2 style="text-align:center">' + esc(title) + '</h2>' +
        '<div class="tag-editor">' +
        '<input id="tags" value="' + esc(tags.join(", ")) + '" placeholder="comma-separated tags">' +
        ' <button id="save-tags">Save tags</button>' +
        '</div>' +
        '<div class="thumbs"></div>';

      const thumbs = content.querySelector(".thumbs");
      files.forEach((file, index) => {
        const thumb = document.createElement("div");
        thumb.className = "thumb";
        thumb.innerHTML =
          '<a href="#/viewer/' + encodeURIComponent(title) + '/' + index + '">' +
          '<img src="/images/' + encodeURIComponent(title) + '/' + encodeURIComponent(file) + '"' +
          ' alt="page ' + (index + 1) + '">' +
          '</a>';
        thumbs.appendChild(thumb);
      });

      document.getElementById("save-tags").addEventListener("click", async () => {
        const tags = document.getElementById("tags").value
          .split(",").map((t) => t.trim()).filter((t) => t.length > 0);
        const res = await fetch("/api/update-tags", {
          method: "POST",
          headers: { "Content-Type": "application/json" },
          body: JSON.stringify({ title: title, tags: tags }),
        });
        if (!res.ok) alert("Failed to save tags");
      });
    }

    async function renderViewer(title, index) {
      const files = await getJson("/list?title=" + encodeURIComponent(title));
      if (files.length === 0) { location.hash = "#/"; return; }
      index = Math.min(Math.max(index, 0), files.length - 1);

      content.innerHTML =
        '<div id="viewer">' +
        '<nav>' +
        '<a id="prev">&laquo; prev</a>' +
        '<span>' + (index + 1) + ' / ' + files.length + '</span>' +
        '<a id="next">next &raquo;</a>' +
        '</nav>' +
        '<img src="/images/' + encodeURIComponent(title) + '/' + encodeURIComponent(files[index]) + '"' +
        ' alt="page ' + (index + 1) + '">' +
        '</div>';

      const go = (i) => {
        location.hash = "#/viewer/" + encodeURIComponent(title) + "/" + i;
      };
      document.getElementById("prev").addEventListener("click", () => go(Math.max(index - 1, 0)));
      document.getElementById("next").addEventListener("click", () => go(Math.min(index + 1, files.length - 1)));
    }

    function route() {
      const parts = location.hash.replace(/^#\/?/, "").split("/");
      if (parts[0] === "gallery" && parts[1]) {
        renderGallery(decodeURIComponent(parts[1]));
      } else if (parts[0] === "viewer" && parts[1]) {
        renderViewer(decodeURIComponent(parts[1]), parseInt(parts[2], 10) || 0);
      } else {
        renderIndex();
      }
    }

    window.addEventListener("hashchange", route);
    route();
  </script>
</body>
</html>
"##;

/// The login form served at `/login`.
pub const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Login - Manga Shelf</title>
</head>
<body>
  <h1>Device login</h1>
  <form method="POST" action="/login_check">
    <input name="passcode" type="password" placeholder="passcode" autofocus>
    <button type="submit">Log in</button>
  </form>
</body>
</html>
"#;

/// Inline failure page rendered when the submitted passcode is wrong.
pub const LOGIN_FAILED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Login failed - Manga Shelf</title>
</head>
<body>
  <h1>Wrong passcode</h1>
  <a href="/login">Back to login</a>
</body>
</html>
"#;

// =============================================================================
// Tests
// =============================================================================
