use contracts::usecases::u001_generate_form::GenerateFormRequest;

/// Generation action for u001.
///
/// Form generation is not wired to a backend yet: the request is only
/// written to the console.
pub async fn generate_form(request: GenerateFormRequest) -> Result<(), String> {
    let payload = request.to_json().map_err(|e| e.to_string())?;

    log::info!("Generating form from prompt: {}", request.prompt);
    log::debug!("u001 payload: {payload}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_form_stub_succeeds() {
        let request = GenerateFormRequest::from_prompt("Contact form with name and email").unwrap();
        assert_eq!(futures::executor::block_on(generate_form(request)), Ok(()));
    }
}
