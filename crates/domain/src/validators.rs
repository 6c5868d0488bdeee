pub fn validate_text_field(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    if value.chars().count() > 200 {
        return Err(format!("{field} cannot exceed 200 characters"));
    }
    Ok(())
}

pub fn validate_description(description: &Option<String>) -> Result<(), String> {
    if let Some(d) = description {
        if d.chars().count() > 5000 {
            return Err("Description cannot exceed 5000 characters".to_string());
        }
    }
    Ok(())
}

pub fn validate_tags(tags: &[String]) -> Result<(), String> {
    if tags.len() > 50 {
        return Err("A disaster cannot carry more than 50 tags".to_string());
    }
    if let Some(tag) = tags.iter().find(|t| t.chars().count() > 64) {
        return Err(format!("Tag '{tag}' exceeds 64 characters"));
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), String> {
    if url.chars().count() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }
    Ok(())
}
