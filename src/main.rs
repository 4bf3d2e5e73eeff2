// Recipe-Local interactive shell
// Reads one command per line from stdin and drives the view coordinator

use std::io::{self, BufRead};

use recipe_local::favorites::FavoritesStore;
use recipe_local::mealdb::Meal;
use recipe_local::view::{Listing, ViewCoordinator, ViewMode, POPULAR_INGREDIENTS};
use recipe_local::AppState;

#[tokio::main]
async fn main() {
    // Initialize env_logger to output to stderr (reads RUST_LOG env var)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let state = match AppState::init() {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to start: {:#}", e);
            std::process::exit(1);
        }
    };

    let mut coordinator = ViewCoordinator::new(state.api.clone(), state.favorites.clone());
    coordinator.load_suggestions().await;

    match state.announcement_dismissed() {
        Ok(false) => {
            println!("Discover new recipes daily! Save your favorites and share with friends.");
            println!("(type `dismiss` to hide this note)");
            println!();
        }
        Ok(true) => {}
        Err(e) => log::warn!("Could not read the announcement flag: {}", e),
    }

    print_listing(&coordinator, &state.favorites);
    println!("Type `help` for the command list.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log::error!("Failed to read line: {}", e);
                continue;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "search" => handle_search(&mut coordinator, &state, rest).await,
            "more" => handle_more(&mut coordinator, &state).await,
            "view" => handle_view(&state, rest).await,
            "fav" => handle_fav(&coordinator, &state, rest).await,
            "unfav" => handle_unfav(&state, rest),
            "favorites" => {
                coordinator.set_mode(ViewMode::Favorites);
                print_listing(&coordinator, &state.favorites);
            }
            "suggest" => handle_suggest(&mut coordinator, &state, rest).await,
            "dismiss" => handle_dismiss(&state),
            "help" => print_help(),
            "quit" | "exit" => break,
            _ => println!("Unknown command `{}`. Type `help` for the list.", command),
        }
    }

    log::info!("Recipe-Local shutting down");
}

async fn handle_search(coordinator: &mut ViewCoordinator, state: &AppState, term: &str) {
    if term.is_empty() {
        // Bare `search` switches back to the search view
        coordinator.set_mode(ViewMode::Search);
        print_listing(coordinator, &state.favorites);
        return;
    }

    match coordinator.search(term).await {
        Ok(()) => {
            if coordinator.results().is_empty() {
                println!("No recipes found. Try searching with different ingredients.");
            }
            print_listing(coordinator, &state.favorites);
        }
        Err(e) => {
            log::error!("Search for '{}' failed: {}", term, e);
            println!("Something went wrong while fetching recipes.");
        }
    }
}

async fn handle_more(coordinator: &mut ViewCoordinator, state: &AppState) {
    if coordinator.mode() != ViewMode::Search {
        println!("Load more only works in the search view.");
        return;
    }
    if !coordinator.has_more() {
        println!("No more recipes to load");
        return;
    }

    let added = coordinator.load_more().await;
    if added == 0 {
        println!("Nothing new could be loaded. Try again.");
        return;
    }

    println!("Loaded {} more recipe(s).", added);
    print_listing(coordinator, &state.favorites);
}

async fn handle_view(state: &AppState, id: &str) {
    if id.is_empty() {
        println!("Usage: view <id>");
        return;
    }

    match state.api.lookup_by_id(id).await {
        Ok(Some(meal)) => print_meal_detail(&meal, &state.favorites),
        Ok(None) => println!("No recipe with id {}.", id),
        Err(e) => {
            log::error!("Lookup for {} failed: {}", id, e);
            println!("Something went wrong while fetching the recipe details.");
        }
    }
}

async fn handle_fav(coordinator: &ViewCoordinator, state: &AppState, id: &str) {
    if id.is_empty() {
        println!("Usage: fav <id>");
        return;
    }
    if state.favorites.is_favorite(id) {
        println!("Already in favorites.");
        return;
    }

    // Prefer whatever is already on screen; fall back to a lookup
    let meal = match coordinator.find_loaded(id) {
        Some(meal) => meal,
        None => match state.api.lookup_by_id(id).await {
            Ok(Some(meal)) => meal,
            Ok(None) => {
                println!("No recipe with id {}.", id);
                return;
            }
            Err(e) => {
                log::error!("Lookup for {} failed: {}", id, e);
                println!("Something went wrong while fetching the recipe details.");
                return;
            }
        },
    };

    let name = meal.name.clone();
    match state.favorites.add(meal) {
        Ok(()) => println!("Added {} to favorites.", name),
        Err(e) => {
            log::error!("Failed to save favorites: {:#}", e);
            println!("Could not update favorites.");
        }
    }
}

fn handle_unfav(state: &AppState, id: &str) {
    if id.is_empty() {
        println!("Usage: unfav <id>");
        return;
    }
    if !state.favorites.is_favorite(id) {
        println!("Not in favorites.");
        return;
    }

    match state.favorites.remove(id) {
        Ok(()) => println!("Removed {} from favorites.", id),
        Err(e) => {
            log::error!("Failed to save favorites: {:#}", e);
            println!("Could not update favorites.");
        }
    }
}

async fn handle_suggest(coordinator: &mut ViewCoordinator, state: &AppState, rest: &str) {
    if rest.is_empty() {
        println!("Popular ingredients:");
        for (i, ingredient) in POPULAR_INGREDIENTS.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, ingredient);
        }
        println!("Type `suggest <number>` to search one of them.");
        return;
    }

    let pick = match rest.parse::<usize>() {
        Ok(n) if (1..=POPULAR_INGREDIENTS.len()).contains(&n) => POPULAR_INGREDIENTS[n - 1],
        _ => {
            println!("Pick a number between 1 and {}.", POPULAR_INGREDIENTS.len());
            return;
        }
    };

    // Suggestion chips search their lowercased name
    handle_search(coordinator, state, &pick.to_lowercase()).await;
}

fn handle_dismiss(state: &AppState) {
    match state.dismiss_announcement() {
        Ok(()) => println!("Note hidden."),
        Err(e) => {
            log::error!("Failed to store the announcement flag: {:#}", e);
            println!("Could not save that.");
        }
    }
}

fn print_listing(coordinator: &ViewCoordinator, favorites: &FavoritesStore) {
    match coordinator.listing() {
        Listing::Favorites(meals) => {
            if meals.is_empty() {
                println!("No favorite recipes yet. Search for recipes and `fav` them.");
                return;
            }
            println!("Your favorite recipes ({}):", meals.len());
            for meal in &meals {
                print_meal_line(meal, favorites);
            }
        }
        Listing::Results(meals) => {
            match coordinator.query() {
                Some(query) => println!("Search results for '{}' ({}):", query, meals.len()),
                None => println!("Search results ({}):", meals.len()),
            }
            for meal in &meals {
                print_meal_line(meal, favorites);
            }
            if coordinator.has_more() {
                println!("Type `more` to load more recipes.");
            } else {
                println!("No more recipes to load");
            }
        }
        Listing::Suggested(meals) => {
            if meals.is_empty() {
                println!("Nothing to show yet. Try `search <ingredient>`.");
                return;
            }
            println!("Suggested recipes ({}):", meals.len());
            for meal in &meals {
                print_meal_line(meal, favorites);
            }
        }
    }
}

fn print_meal_line(meal: &Meal, favorites: &FavoritesStore) {
    let marker = if favorites.is_favorite(&meal.id) { "*" } else { " " };

    let mut tags = Vec::new();
    if let Some(category) = meal.category.as_deref() {
        tags.push(category);
    }
    if let Some(area) = meal.area.as_deref() {
        tags.push(area);
    }

    if tags.is_empty() {
        println!(" {} {:>6}  {}", marker, meal.id, meal.name);
    } else {
        println!(" {} {:>6}  {} ({})", marker, meal.id, meal.name, tags.join(", "));
    }
}

fn print_meal_detail(meal: &Meal, favorites: &FavoritesStore) {
    let marker = if favorites.is_favorite(&meal.id) { " [favorite]" } else { "" };
    println!("{} ({}){}", meal.name, meal.id, marker);

    let mut tags = Vec::new();
    if let Some(category) = meal.category.as_deref() {
        tags.push(category);
    }
    if let Some(area) = meal.area.as_deref() {
        tags.push(area);
    }
    if !tags.is_empty() {
        println!("{}", tags.join(" / "));
    }
    if let Some(thumbnail) = meal.thumbnail.as_deref() {
        println!("Image: {}", thumbnail);
    }

    let pairs = meal.ingredient_pairs();
    if !pairs.is_empty() {
        println!();
        println!("Ingredients:");
        for (ingredient, measure) in &pairs {
            if measure.is_empty() {
                println!("  {}", ingredient);
            } else {
                println!("  {:<30} {}", ingredient, measure);
            }
        }
    }

    if let Some(instructions) = meal.instructions.as_deref() {
        println!();
        println!("Instructions:");
        println!("{}", instructions);
    }

    if let Some(video_id) = meal.youtube_video_id() {
        println!();
        println!("Video: https://www.youtube.com/watch?v={}", video_id);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  search <ingredient>   Search recipes by ingredient");
    println!("  search                Switch back to the search view");
    println!("  more                  Load more recipes into the current results");
    println!("  view <id>             Show full detail for a recipe");
    println!("  fav <id>              Add a recipe to the favorites");
    println!("  unfav <id>            Remove a recipe from the favorites");
    println!("  favorites             Show the favorites view");
    println!("  suggest               List popular ingredients");
    println!("  suggest <number>      Search one of the popular ingredients");
    println!("  dismiss               Hide the startup note for good");
    println!("  help                  Show this list");
    println!("  quit                  Exit");
}
