use crate::components::IngredientTable;
use crate::services::{ConversionService, ConvertRecipeRequest, UnitSystem};
use crate::store::{QuantifyStore, use_quantify};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct UnitSystemSelectProps {
    label: AttrValue,
    value: UnitSystem,
    onchange: Callback<UnitSystem>,
}

#[function_component(UnitSystemSelect)]
fn unit_system_select(props: &UnitSystemSelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Some(system) = UnitSystem::from_code(&select.value()) {
                onchange.emit(system);
            }
        })
    };

    html! {
        <label class="flex flex-col text-sm text-gray-600 gap-1">
            {props.label.clone()}
            <select class="border rounded px-2 py-1" {onchange}>
                {for UnitSystem::ALL.into_iter().map(|system| html! {
                    <option value={system.code()} selected={system == props.value}>
                        {system.label()}
                    </option>
                })}
            </select>
        </label>
    }
}

#[function_component(RecipeInput)]
pub fn recipe_input() -> Html {
    let quantify = use_quantify();
    let service = use_memo((), |_| ConversionService::new());
    let recipe_text = use_state(String::new);
    let from_system = use_state(|| UnitSystem::Jp);
    let to_system = use_state(|| UnitSystem::Us);
    let is_loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_text_change = {
        let recipe_text = recipe_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            recipe_text.set(input.value());
        })
    };

    let on_from_change = {
        let from_system = from_system.clone();
        Callback::from(move |system| from_system.set(system))
    };

    let on_to_change = {
        let to_system = to_system.clone();
        Callback::from(move |system| to_system.set(system))
    };

    let on_convert = {
        let quantify = quantify.clone();
        let service = service.clone();
        let recipe_text = recipe_text.clone();
        let from_system = from_system.clone();
        let to_system = to_system.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |_| {
            let request = ConvertRecipeRequest {
                recipe_text: (*recipe_text).clone(),
                from_unit_system: *from_system,
                to_unit_system: *to_system,
            };
            let quantify = quantify.clone();
            let service = service.clone();
            let is_loading = is_loading.clone();
            let error_message = error_message.clone();

            is_loading.set(true);
            error_message.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match service.convert(&request).await {
                    Ok(ingredients) => quantify.set_converted_ingredients(ingredients),
                    Err(e) => {
                        tracing::warn!(error = %e, "recipe conversion failed");
                        error_message.set(Some(e));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let on_clear = {
        let quantify = quantify.clone();
        let recipe_text = recipe_text.clone();
        Callback::from(move |_| {
            recipe_text.set(String::new());
            quantify.clear_converted_ingredients();
        })
    };

    html! {
        <section class="max-w-3xl mx-auto p-6 space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">{"Recipe customizer"}</h1>
            <textarea
                class="w-full h-40 border rounded p-3 font-mono text-sm"
                placeholder="200g flour\n1 tbsp sugar\nsalt to taste"
                value={(*recipe_text).clone()}
                oninput={on_text_change}
            />
            <div class="flex gap-4 items-end">
                <UnitSystemSelect label="From" value={*from_system} onchange={on_from_change} />
                <UnitSystemSelect label="To" value={*to_system} onchange={on_to_change} />
                <button
                    class="px-4 py-2 bg-orange-500 text-white rounded disabled:opacity-50"
                    disabled={*is_loading || recipe_text.trim().is_empty()}
                    onclick={on_convert}
                >
                    {if *is_loading { "Converting..." } else { "Convert" }}
                </button>
                <button class="px-4 py-2 border rounded" onclick={on_clear}>
                    {"Clear"}
                </button>
            </div>
            if let Some(error) = (*error_message).clone() {
                <p class="text-sm text-red-600">{error}</p>
            }
            <IngredientTable ingredients={quantify.converted_ingredients.clone()} />
        </section>
    }
}
