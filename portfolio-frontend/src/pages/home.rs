use leptos::*;
use rand::seq::SliceRandom;

const GREETINGS: [&str; 6] = [
    "Hello world!",
    "¡Hola Mundo!",
    "你好，世界！",
    "Bonjour le monde!",
    "How are you doing?",
    "How do you do?",
];

const CAT_IMAGES: [&str; 2] = ["images/kitten-in-bed.jpg", "images/sleepy-kitten.jpg"];

fn random_greeting() -> &'static str {
    GREETINGS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(GREETINGS[0])
}

fn random_cat() -> &'static str {
    CAT_IMAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(CAT_IMAGES[0])
}

#[component]
pub fn Home() -> impl IntoView {
    let (greeting, set_greeting) = create_signal(random_greeting());
    let (cat, set_cat) = create_signal(random_cat());

    view! {
      <section>
        <div class="container p-6 mx-auto">
          <h1 class="text-3xl font-bold">"Welcome to my portfolio"</h1>
          <p class="mt-4 text-xl">{ greeting }</p>
          <button
            class="mt-2 inline-block px-6 py-2 border-2 border-gray-300 font-medium text-xs leading-tight uppercase rounded hover:bg-gray-100 focus:outline-none transition duration-150 ease-in-out"
            on:click=move |_| set_greeting.update(|g| *g = random_greeting())
          >
            "New greeting"
          </button>
          <div class="mt-6">
            <img src=move || cat.get() alt="A cat" style="width: 500px" />
            <button
              class="mt-2 inline-block px-6 py-2 border-2 border-gray-300 font-medium text-xs leading-tight uppercase rounded hover:bg-gray-100 focus:outline-none transition duration-150 ease-in-out"
              on:click=move |_| set_cat.update(|c| *c = random_cat())
            >
              "Another cat"
            </button>
          </div>
        </div>
      </section>
    }
}
