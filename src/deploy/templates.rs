//! Rendered site documents: Hugo configuration, welcome post, CI workflow.
//!
//! All three renderers are pure functions of the deploy inputs, so re-running
//! against the same directory rewrites byte-identical files.

/// Site base URL derived from the repository URL: a trailing `.git` is
/// stripped and a trailing `/` appended.
pub fn base_url(repo_url: &str) -> String {
    let trimmed = repo_url.strip_suffix(".git").unwrap_or(repo_url);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    format!("{trimmed}/")
}

/// Unified Hugo configuration for the Stack theme, tuned for Korean blogs.
pub fn hugo_config(title: &str, subtitle: &str, repo_url: &str) -> String {
    let base_url = base_url(repo_url);
    format!(
        r#"baseURL = "{base_url}"
languageCode = "ko-kr"
title = "{title}"
defaultContentLanguage = "ko"
hasCJKLanguage = true

[[module.imports]]
    path = "github.com/CaiJimmy/hugo-theme-stack/v3"

[pagination]
    pagerSize = 5

[permalinks]
    post = "/p/:slug/"
    page = "/:slug/"

[params]
    mainSections = ["post"]
    rssFullContent = true

    [params.footer]
        since = 2026
        customText = "{title} - {subtitle}"

    [params.sidebar]
        emoji = "✏️"
        subtitle = "{subtitle}"

    [params.article]
        [params.article.license]
            enabled = false

    [params.comments]
        enabled = false

    [params.widgets]
        homepage = [
            {{ type = "search" }},
            {{ type = "archives", params = {{ limit = 5 }} }},
            {{ type = "categories", params = {{ limit = 10 }} }},
            {{ type = "tag-cloud", params = {{ limit = 10 }} }},
        ]
        page = [{{ type = "toc" }}]

[menu]
    [[menu.main]]
        identifier = "home"
        name = "홈"
        url = "/"
        weight = 1
        [menu.main.params]
            icon = "home"

    [[menu.main]]
        identifier = "archives"
        name = "아카이브"
        url = "/archives/"
        weight = 2
        [menu.main.params]
            icon = "archives"

    [[menu.main]]
        identifier = "search"
        name = "검색"
        url = "/search/"
        weight = 3
        [menu.main.params]
            icon = "search"
"#
    )
}

/// Welcome post with front-matter and a body paragraph referencing the title.
/// The date is fixed so reruns stay deterministic.
pub fn welcome_post(title: &str, subtitle: &str) -> String {
    format!(
        r#"---
title: "{title} 블로그에 오신 것을 환영합니다!"
description: "{subtitle}"
date: 2026-02-22T00:00:00+09:00
---
안녕하세요! **{title}** 블로그를 방문해 주셔서 감사합니다.
"#
    )
}

/// GitHub Actions workflow: build with Hugo and deploy to Pages on every push
/// to `main`.
pub fn workflow() -> &'static str {
    r#"name: Deploy Hugo site to Pages
on:
  push:
    branches: ["main"]
  workflow_dispatch:
permissions:
  contents: read
  pages: write
  id-token: write
concurrency:
  group: "pages"
  cancel-in-progress: false
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - name: Checkout
        uses: actions/checkout@v4
        with:
          submodules: recursive
          fetch-depth: 0
      - name: Setup Pages
        uses: actions/configure-pages@v4
      - name: Install Hugo
        run: sudo apt-get install hugo
      - name: Build with Hugo
        run: hugo --minify --baseURL "${{ steps.pages.outputs.base_url }}/"
      - name: Upload artifact
        uses: actions/upload-pages-artifact@v3
        with:
          path: ./public
  deploy:
    needs: build
    runs-on: ubuntu-latest
    environment:
      name: github-pages
      url: ${{ steps.deployment.outputs.page_url }}
    steps:
      - name: Deploy to GitHub Pages
        id: deployment
        uses: actions/deploy-pages@v4
"#
}
