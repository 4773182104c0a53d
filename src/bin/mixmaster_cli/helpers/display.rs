// ABOUTME: Terminal renderer for the mixmaster CLI
// ABOUTME: Prints the cocktail list, My Bar, favorites, and recipe detail views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use mixmaster::engine::can_make;
use mixmaster::models::Recipe;
use mixmaster::session::Renderer;
use mixmaster::state::{BrowserView, RecipeDetail};

/// Which list the terminal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Filtered recipe list
    #[default]
    Cocktails,
    /// Inventory
    MyBar,
    /// Starred recipes
    Favorites,
}

/// Renderer writing frames to stdout
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    tab: Tab,
}

impl TerminalRenderer {
    /// Switch the tab shown by the next frame
    pub fn show(&mut self, tab: Tab) {
        self.tab = tab;
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &BrowserView<'_>) {
        if let Some(notice) = view.notice {
            let hint = if notice.retryable {
                " (try `refresh`)"
            } else {
                ""
            };
            println!("! {}{hint}", notice.message);
        }

        if let Some(detail) = &view.detail {
            display_detail(detail);
            return;
        }

        match self.tab {
            Tab::Cocktails => display_cocktails(view),
            Tab::MyBar => display_bar(view),
            Tab::Favorites => display_favorites(view),
        }
    }
}

fn recipe_line(recipe: &Recipe, view: &BrowserView<'_>) -> String {
    let star = if view.favorites.contains(&recipe.id) {
        '*'
    } else {
        ' '
    };
    let makeable = if can_make(recipe, view.inventory) {
        "  [can make]"
    } else {
        ""
    };
    format!(
        "{star} {:>6}  {}  ({}, {}){makeable}",
        recipe.id,
        recipe.name,
        recipe.category,
        recipe.alcoholic_label()
    )
}

/// Print the filtered recipe list
pub fn display_cocktails(view: &BrowserView<'_>) {
    let term = if view.term.is_empty() {
        "all recipes".to_owned()
    } else {
        format!("'{}'", view.term)
    };
    let loading = if view.loading { "  loading..." } else { "" };
    println!("\nCocktails: {term}, filter {}{loading}", view.filter);
    println!("{}", "=".repeat(60));

    if view.visible.is_empty() && !view.loading {
        println!("   No cocktails found");
    }
    for recipe in &view.visible {
        println!("{}", recipe_line(recipe, view));
    }
}

/// Print the inventory
pub fn display_bar(view: &BrowserView<'_>) {
    println!("\nMy Bar ({} ingredients)", view.inventory.len());
    println!("{}", "=".repeat(60));
    if view.inventory.is_empty() {
        println!("   Your bar is empty. Add ingredients with `bar add <name>`");
    }
    for item in view.inventory.iter() {
        println!("   - {item}");
    }
}

/// Print the favorites
pub fn display_favorites(view: &BrowserView<'_>) {
    println!("\nFavorites ({})", view.favorites.len());
    println!("{}", "=".repeat(60));
    if view.favorites.is_empty() {
        println!("   No favorites yet. Star a cocktail with `fav <id>`");
    }
    for recipe in view.favorites.recipes() {
        println!("{}", recipe_line(recipe, view));
    }
}

/// Print one recipe's detail
pub fn display_detail(detail: &RecipeDetail<'_>) {
    let star = if detail.favorite { " *" } else { "" };
    println!("\n{}{star}", detail.name);
    println!("{}", "=".repeat(60));
    println!("   {} / {}", detail.category, detail.alcoholic);
    if let Some(glass) = detail.glass {
        println!("   Glass: {glass}");
    }
    if let Some(image) = detail.image_ref {
        println!("   Image: {image}");
    }

    println!("\nIngredients:");
    for (name, measure) in &detail.ingredients {
        if measure.is_empty() {
            println!("   - {name}");
        } else {
            println!("   - {} {name}", measure.trim());
        }
    }

    println!("\nInstructions:");
    println!("   {}", detail.instructions);
    println!("\n(`close` to go back)");
}

/// Print the shell's command reference
pub fn display_help() {
    println!("\nCommands:");
    println!("   search <term>         look up cocktails by name (empty term lists all)");
    println!("   refresh               repeat the last lookup");
    println!("   filter <name>         all | alcoholic | non-alcoholic | can-make");
    println!("   list                  show the cocktail list");
    println!("   bar                   show My Bar");
    println!("   bar add <name>        add an ingredient");
    println!("   bar remove <name>     remove an ingredient");
    println!("   bar toggle <name>     add or remove an ingredient");
    println!("   favorites             show favorites");
    println!("   fav <id>              star or un-star a cocktail");
    println!("   show <id>             open a cocktail's detail");
    println!("   close                 close the detail");
    println!("   help                  this list");
    println!("   quit                  leave");
}
