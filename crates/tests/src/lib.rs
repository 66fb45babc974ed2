#[cfg(test)]
mod export_csv_tests;
#[cfg(test)]
mod recommender_tests;
#[cfg(test)]
mod sentiment_flow_tests;
#[cfg(test)]
mod training_status_tests;
