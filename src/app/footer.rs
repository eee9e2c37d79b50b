use leptos::prelude::*;

fn copyright(name: &str) -> String {
    format!("© {} {name}. All rights reserved.", env!("BUILD_YEAR"))
}

#[component]
pub fn Footer(#[prop(into)] name: String, #[prop(into)] tagline: String) -> impl IntoView {
    let copyright = copyright(&name);
    view! {
        <footer class="py-12 px-4 sm:px-6 lg:px-8 border-t border-gray-200 dark:border-gray-700">
            <div class="max-w-6xl mx-auto text-center">
                <div class="text-2xl font-bold font-mono mb-4">
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-500 to-purple-600">
                        {name}
                    </span>
                </div>
                <p class="mb-6 text-gray-500 dark:text-gray-400">{tagline}</p>
                <p class="text-sm text-gray-500 dark:text-gray-400" title=env!("BUILD_TIME")>
                    {copyright}
                </p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_uses_build_year() {
        let line = copyright("Alex Rivera");
        assert!(line.starts_with("© "));
        assert!(line.contains(env!("BUILD_YEAR")));
        assert!(line.ends_with("Alex Rivera. All rights reserved."));
    }
}
