//! About page describing the analyzer.

use leptos::prelude::*;

/// Static about page.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <div class="about-page__intro">
                <h1>"About RealEstate Analyzer"</h1>
                <p>
                    "A tool for analyzing real estate market trends using natural language queries"
                </p>
            </div>

            <div class="card about-card">
                <h2>"How It Works"</h2>
                <div class="about-card__grid">
                    <div class="about-card__item">
                        <h5>"Analyze"</h5>
                        <p>"Get insights on real estate markets with simple natural language queries"</p>
                    </div>
                    <div class="about-card__item">
                        <h5>"Data-Driven"</h5>
                        <p>"Powered by comprehensive real estate data and advanced analytics"</p>
                    </div>
                    <div class="about-card__item">
                        <h5>"AI-Powered"</h5>
                        <p>"Utilizes machine learning to provide accurate market predictions"</p>
                    </div>
                </div>
            </div>

            <div class="card about-card">
                <h2>"Features"</h2>
                <div class="about-card__grid">
                    <div class="about-card__item">
                        <h5>"Market Trends"</h5>
                        <p>"Track price movements and demand trends across different localities over time."</p>
                    </div>
                    <div class="about-card__item">
                        <h5>"Natural Language Queries"</h5>
                        <p>"Ask questions in plain English and get meaningful insights instantly."</p>
                    </div>
                    <div class="about-card__item">
                        <h5>"Detailed Reports"</h5>
                        <p>"Access comprehensive reports with charts, tables, and key metrics."</p>
                    </div>
                    <div class="about-card__item">
                        <h5>"Export Data"</h5>
                        <p>"Download analysis results and raw data for further processing."</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
